//! Count command: occurrences of one word.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use textmetrics_core::metrics;

use super::{display_count, print_row, read_input_file};

/// Arguments for the `count` subcommand.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// File to search.
    pub file: Utf8PathBuf,

    /// Word to count (case-insensitive, whole words only).
    pub word: String,
}

#[derive(Serialize)]
struct WordOccurrences<'a> {
    word: &'a str,
    count: usize,
}

/// Count whole-word occurrences of a word in a file.
#[instrument(name = "cmd_count", skip_all, fields(file = %args.file))]
pub fn cmd_count(
    args: CountArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let word = args.word.trim();
    debug!(file = %args.file, word, "executing count command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let count = metrics::count_specific_word(&content, word);

    if global_json {
        let out = WordOccurrences { word, count };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_row(&format!("Occurrences of '{word}'"), &display_count(count));
    }

    Ok(())
}
