//! Aggregate report over all metrics.
//!
//! [`analyze_text`] runs each metric once and bundles the answers, for
//! callers that want everything at once (the `analyze` command, the
//! interactive prompt, the MCP `analyze_text` tool).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics;
use crate::text;

/// Result of analyzing a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextReport {
    /// The search word, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Whole-word occurrences of [`Self::word`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// Total number of word tokens.
    pub total_words: usize,
    /// Number of distinct lowercased words.
    pub unique_words: usize,
    /// Most frequent word (lowercased), absent when there are no words.
    pub most_common_word: Option<String>,
    /// Mean word length in characters.
    pub average_word_length: f64,
    /// Number of paragraphs.
    pub paragraphs: usize,
    /// Number of sentences.
    pub sentences: usize,
}

/// Run every metric over `text`.
///
/// `word` is trimmed. A missing word leaves the word fields unset; a blank
/// one is kept and counts 0.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_text(text: &str, word: Option<&str>) -> TextReport {
    let word = word.map(str::trim);
    let word_count = word.map(|w| metrics::count_specific_word(text, w));

    let frequencies = metrics::word_frequencies(text);
    let total_words = text::words(text).count();

    let report = TextReport {
        word: word.map(str::to_string),
        word_count,
        total_words,
        unique_words: frequencies.len(),
        most_common_word: frequencies.first().map(|wc| wc.word.clone()),
        average_word_length: metrics::calculate_average_word_length(text),
        paragraphs: metrics::count_paragraphs(text),
        sentences: metrics::count_sentences(text),
    };

    tracing::debug!(
        total_words = report.total_words,
        paragraphs = report.paragraphs,
        sentences = report.sentences,
        "text analyzed"
    );
    report
}
