//! Interactive command: prompt for a file and a word, then report.
//!
//! A path that cannot be read is reported and the prompt repeats. End of
//! input at any prompt ends the session without an error.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;
use tracing::{debug, instrument, warn};

use textmetrics_core::report::{self, TextReport};

use super::analyze::print_report;
use super::read_input_file;

const PATH_PROMPT: &str = "Enter the path to the text file: ";
const WORD_PROMPT: &str = "Enter the word you want to count: ";

/// Arguments for the `interactive` subcommand.
#[derive(Args, Debug, Default)]
pub struct InteractiveArgs {
    /// Decimal places for the average word length.
    #[arg(long)]
    pub precision: Option<usize>,
}

/// Run the prompt on stdin/stdout.
#[instrument(name = "cmd_interactive", skip_all)]
pub fn cmd_interactive(
    args: InteractiveArgs,
    global_json: bool,
    config_precision: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(json = global_json, "executing interactive command");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let Some(report) = prompt_for_report(stdin.lock(), stdout.lock(), max_input_bytes)? else {
        return Ok(());
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        print_report(&report, args.precision.unwrap_or(config_precision));
    }

    Ok(())
}

/// Ask for a readable file and a search word, then analyze.
///
/// Returns `None` if input ends before a file was read.
pub(crate) fn prompt_for_report<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<Option<TextReport>> {
    let content = loop {
        let Some(path) = prompt(&mut input, &mut output, PATH_PROMPT)? else {
            writeln!(output)?;
            return Ok(None);
        };
        if path.is_empty() {
            continue;
        }

        match read_input_file(Utf8Path::new(&path), max_input_bytes) {
            Ok(content) => break content,
            Err(err) if is_not_found(&err) => {
                warn!(path = %path, "input file not found");
                writeln!(output, "Error: File not found: {path}")?;
            }
            Err(err) => {
                warn!(path = %path, error = %err, "input file unreadable");
                writeln!(output, "Error: {err:#}")?;
            }
        }
    };

    let word = prompt(&mut input, &mut output, WORD_PROMPT)?.unwrap_or_default();
    Ok(Some(report::analyze_text(&content, Some(&word))))
}

/// Print `message`, read one line, and return it trimmed. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> anyhow::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.root_cause()
        .downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}
