//! Analyze command: every metric for one file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use textmetrics_core::report::{self, TextReport};

use super::{display_average, display_count, display_opt, print_row, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Word to count occurrences of (case-insensitive, whole words).
    #[arg(short, long)]
    pub word: Option<String>,

    /// Decimal places for the average word length.
    #[arg(long)]
    pub precision: Option<usize>,
}

/// Report every metric for a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_precision: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, word = ?args.word, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = report::analyze_text(&content, args.word.as_deref());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.precision.unwrap_or(config_precision));
    }

    Ok(())
}

/// Print a report under the results banner.
pub(crate) fn print_report(report: &TextReport, precision: usize) {
    println!(
        "{}",
        "--- Text Analysis Results ---".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    for (label, value) in report_rows(report, precision) {
        print_row(&label, &value);
    }
}

/// Label/value pairs for a report, in display order.
pub(crate) fn report_rows(report: &TextReport, precision: usize) -> Vec<(String, String)> {
    let mut rows = Vec::with_capacity(7);

    if let (Some(word), Some(count)) = (&report.word, report.word_count) {
        rows.push((format!("Occurrences of '{word}'"), display_count(count)));
    }

    rows.extend([
        (
            "Most common word".to_string(),
            display_opt(report.most_common_word.as_deref()),
        ),
        (
            "Average word length".to_string(),
            display_average(report.average_word_length, precision),
        ),
        (
            "Number of paragraphs".to_string(),
            display_count(report.paragraphs),
        ),
        (
            "Number of sentences".to_string(),
            display_count(report.sentences),
        ),
        ("Total words".to_string(), display_count(report.total_words)),
        ("Unique words".to_string(), display_count(report.unique_words)),
    ]);

    rows
}
