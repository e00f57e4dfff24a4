//! Text segmentation shared by the metrics.
//!
//! Provides the word tokenizer, whole-word matcher, paragraph splitter, and
//! sentence splitter. Every metric that talks about "words" goes through
//! [`words`] or [`count_whole_word`], so they agree on what a word is: a
//! maximal run of letters, numbers, and `_`. Combining marks are not word
//! characters, so a decomposed `cafe\u{301}` is the word `cafe`.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a single word token. Must agree with [`is_word_char`].
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Alphabetic}\p{N}_]+").expect("valid regex"));

/// Regex for a paragraph break: a newline, optional blank content, another newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Regex for a run of sentence terminators.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Iterate over the word tokens of `text`, in order, without case folding.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Whether `c` can be part of a word: a letter, a number, or `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Count case-insensitive whole-word occurrences of `needle` in `haystack`.
///
/// Both sides are lowercased and `needle` is matched literally, so `c++` or
/// `a.b` carry no pattern meaning. A hit needs a word boundary at each edge,
/// where a boundary means the characters on either side differ in
/// [`is_word_char`] and the ends of the text count as non-word. Hits do not
/// overlap; the scan resumes after each one.
pub fn count_whole_word(haystack: &str, needle: &str) -> usize {
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
        return 0;
    };

    let mut count = 0;
    let mut pos = 0;
    while let Some(offset) = haystack[pos..].find(needle.as_str()) {
        let start = pos + offset;
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();

        if is_boundary(before, first) && is_boundary(after, last) {
            count += 1;
            pos = end;
        } else {
            pos = start + first.len_utf8();
        }
    }
    count
}

fn is_boundary(outside: Option<char>, inside: char) -> bool {
    outside.is_some_and(is_word_char) != is_word_char(inside)
}

/// Strip leading and trailing ASCII punctuation from a token.
///
/// Interior characters are kept, so `don't` stays `don't`.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Split text into paragraphs separated by one or more blank lines.
///
/// The text is trimmed first. Segments are returned as-is, without
/// filtering; an empty text yields a single empty segment.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK.split(text.trim()).collect()
}

/// Split text into sentences on runs of `.`, `!`, and `?`.
///
/// Blank segments are dropped and the remaining ones are trimmed.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_punctuation() {
        let tokens: Vec<_> = words("Hello, world! It's 2024.").collect();
        assert_eq!(tokens, vec!["Hello", "world", "It", "s", "2024"]);
    }

    #[test]
    fn words_keep_underscores_and_unicode() {
        let tokens: Vec<_> = words("snake_case café naïve").collect();
        assert_eq!(tokens, vec!["snake_case", "café", "naïve"]);
    }

    #[test]
    fn words_empty_input() {
        assert_eq!(words("").count(), 0);
        assert_eq!(words(" -- ... ").count(), 0);
    }

    #[test]
    fn words_stop_at_combining_marks() {
        let tokens: Vec<_> = words("cafe\u{301} bar").collect();
        assert_eq!(tokens, vec!["cafe", "bar"]);
    }

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('É'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('\u{301}'));
    }

    #[test]
    fn whole_word_is_case_insensitive_and_bounded() {
        assert_eq!(count_whole_word("Cat category CAT cats", "cat"), 2);
    }

    #[test]
    fn whole_word_is_literal() {
        assert_eq!(count_whole_word("see a.b here", "a.b"), 1);
        assert_eq!(count_whole_word("see axb here", "a.b"), 0);
    }

    #[test]
    fn whole_word_edge_boundaries_follow_the_needle() {
        // a needle ending in punctuation needs a word character after it
        assert_eq!(count_whole_word("(x) [x]", "x)"), 0);
        assert_eq!(count_whole_word("(x)y", "x)"), 1);
    }

    #[test]
    fn whole_word_retries_inside_a_rejected_hit() {
        // "aa" at 0 is glued to the next "a"; the hit at 1 is bounded
        assert_eq!(count_whole_word("aaa aa", "aa"), 1);
        assert_eq!(count_whole_word("aa aa", "aa"), 2);
    }

    #[test]
    fn whole_word_handles_long_needles() {
        let word = "a".repeat(300_000);
        assert_eq!(count_whole_word(&format!("{word} x {word}"), &word), 2);
        assert_eq!(count_whole_word(&format!("{word}a"), &word), 0);
    }

    #[test]
    fn whole_word_empty_needle() {
        assert_eq!(count_whole_word("anything", ""), 0);
    }

    #[test]
    fn strip_punctuation_only_touches_edges() {
        assert_eq!(strip_punctuation("_init_"), "init");
        assert_eq!(strip_punctuation("don't"), "don't");
        assert_eq!(strip_punctuation("___"), "");
    }

    #[test]
    fn split_paragraphs_collapses_blank_lines() {
        let paras = split_paragraphs("One.\n\n  \n\nTwo.\n \t\nThree.");
        assert_eq!(paras, vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn split_paragraphs_single_newline_is_not_a_break() {
        assert_eq!(split_paragraphs("line one\nline two").len(), 1);
    }

    #[test]
    fn split_paragraphs_empty_is_one_segment() {
        assert_eq!(split_paragraphs("   \n\n  "), vec![""]);
    }

    #[test]
    fn split_sentences_merges_terminator_runs() {
        let sentences = split_sentences("Wait... What?! Really.");
        assert_eq!(sentences, vec!["Wait", "What", "Really"]);
    }

    #[test]
    fn split_sentences_keeps_trailing_fragment() {
        assert_eq!(split_sentences("Done. and more").len(), 2);
    }
}
