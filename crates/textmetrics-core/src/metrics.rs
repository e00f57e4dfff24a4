//! The text metrics.
//!
//! Five independent, pure functions over a borrowed string:
//!
//! - [`count_specific_word`] - case-insensitive whole-word occurrences
//! - [`identify_most_common_word`] - most frequent word, first occurrence wins ties
//! - [`calculate_average_word_length`] - mean token length after edge punctuation is stripped
//! - [`count_paragraphs`] - blank-line separated blocks, at least 1
//! - [`count_sentences`] - spans between `.`/`!`/`?` runs, at least 1
//!
//! Plus the frequency table the most-common lookup is built on
//! ([`word_frequencies`], [`top_words`]).
//!
//! None of these return `Result`: empty input is a normal value with a
//! defined answer.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// A word and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The lowercased word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Count case-insensitive whole-word occurrences of `word` in `text`.
///
/// Returns 0 if either argument is empty. `word` is matched literally;
/// punctuation in it carries no pattern meaning, and its length is not limited.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn count_specific_word(text: &str, word: &str) -> usize {
    if text.is_empty() || word.is_empty() {
        return 0;
    }

    text::count_whole_word(text, word)
}

/// Count every word in `text`, case-insensitively.
///
/// Ordered by descending count. Words with equal counts keep the order in
/// which they first appear in the text.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn word_frequencies(text: &str) -> Vec<WordCount> {
    let lowered = text.to_lowercase();

    // index into `ranked` keyed by word, so first-seen order is preserved
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<WordCount> = Vec::new();

    for token in text::words(&lowered) {
        if let Some(&slot) = index.get(token) {
            ranked[slot].count += 1;
        } else {
            index.insert(token, ranked.len());
            ranked.push(WordCount {
                word: token.to_string(),
                count: 1,
            });
        }
    }

    // stable sort keeps first-occurrence order among ties
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The `limit` most frequent words, in [`word_frequencies`] order.
pub fn top_words(text: &str, limit: usize) -> Vec<WordCount> {
    let mut ranked = word_frequencies(text);
    ranked.truncate(limit);
    ranked
}

/// Identify the most frequent word in `text`, lowercased.
///
/// Returns `None` for blank text or text without any word characters.
/// When several words share the highest count, the one that appears first
/// in the text is returned.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn identify_most_common_word(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    word_frequencies(text).into_iter().next().map(|wc| wc.word)
}

/// Mean length of the words in `text`, in characters.
///
/// Leading and trailing ASCII punctuation is stripped from each token before
/// it is measured. A token that strips down to nothing (`___`) still counts
/// toward the denominator. Returns 0.0 when there are no words.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn calculate_average_word_length(text: &str) -> f64 {
    let (total, count) = text::words(text).fold((0usize, 0usize), |(total, count), token| {
        (total + text::strip_punctuation(token).chars().count(), count + 1)
    });

    if count == 0 {
        return 0.0;
    }

    total as f64 / count as f64
}

/// Count blank-line separated paragraphs.
///
/// Blank text counts as a single (empty) paragraph.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_paragraphs(text: &str) -> usize {
    if text.trim().is_empty() {
        return 1;
    }

    text::split_paragraphs(text).len()
}

/// Count sentences delimited by runs of `.`, `!`, or `?`.
///
/// Blank text counts as one sentence, and so does text made only of
/// terminators and whitespace.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 1;
    }

    text::split_sentences(text).len().max(1)
}
