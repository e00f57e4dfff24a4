//! Core library for textmetrics.
//!
//! Word-level statistics for a single document: occurrences of a chosen
//! word, the most common word, average word length, and paragraph and
//! sentence counts. All metrics are pure functions over `&str`.
//!
//! # Modules
//!
//! - [`metrics`] - The individual metrics and the word-frequency table
//! - [`report`] - All metrics bundled into one serializable report
//! - [`text`] - Word tokenizer and paragraph/sentence splitting
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textmetrics_core::metrics;
//!
//! let text = "The cat sat on the mat. The end!";
//! assert_eq!(metrics::count_specific_word(text, "the"), 3);
//! assert_eq!(metrics::identify_most_common_word(text).as_deref(), Some("the"));
//! assert_eq!(metrics::count_sentences(text), 2);
//! ```
#![deny(unsafe_code)]

pub mod config;

pub mod error;

pub mod metrics;

pub mod report;

pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};

pub use error::{ConfigError, ConfigResult, InputError};

pub use metrics::{
    WordCount, calculate_average_word_length, count_paragraphs, count_sentences,
    count_specific_word, identify_most_common_word, top_words, word_frequencies,
};

pub use report::{TextReport, analyze_text};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Reject `text` if it is larger than `limit` bytes.
///
/// A `limit` of `None` accepts any size.
pub fn check_input_size(text: &str, limit: Option<usize>) -> Result<(), InputError> {
    if let Some(limit) = limit
        && text.len() > limit
    {
        return Err(InputError::TooLarge {
            size: text.len(),
            limit,
        });
    }
    Ok(())
}
