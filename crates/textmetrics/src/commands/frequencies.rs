//! Frequencies command: the most common words and their counts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use textmetrics_core::metrics::{self, WordCount};

use super::{NO_DATA, read_input_file};

/// Arguments for the `frequencies` subcommand.
#[derive(Args, Debug)]
pub struct FrequenciesArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Number of words to list.
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

/// List the most frequent words in a file.
#[instrument(name = "cmd_frequencies", skip_all, fields(file = %args.file))]
pub fn cmd_frequencies(
    args: FrequenciesArgs,
    global_json: bool,
    config_top: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let limit = args.top.unwrap_or(config_top);
    debug!(file = %args.file, limit, "executing frequencies command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let ranked = metrics::top_words(&content, limit);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else if ranked.is_empty() {
        println!("{NO_DATA}");
    } else {
        for line in format_table(&ranked) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Right-align counts so the words line up.
fn format_table(ranked: &[WordCount]) -> Vec<String> {
    let width = ranked
        .iter()
        .map(|wc| wc.count.to_string().len())
        .max()
        .unwrap_or(1);

    ranked
        .iter()
        .map(|wc| {
            format!(
                "{:>width$}  {}",
                wc.count,
                wc.word.if_supports_color(Stream::Stdout, |w| w.green())
            )
        })
        .collect()
}
