//! Command implementations.
//!
//! Also holds the pieces every command shares: reading the input file under
//! the size limit, and rendering metric values, where a zero or absent
//! result is shown as [`NO_DATA`] instead of a bare `0` or blank.

use std::fmt::Display;

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::{OwoColorize, Stream};

pub mod analyze;
pub mod count;
pub mod frequencies;
pub mod info;
pub mod interactive;
#[cfg(feature = "mcp")]
pub mod serve;

/// Placeholder printed for zero or absent metrics.
pub const NO_DATA: &str = "no data found";

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Render a count, or [`NO_DATA`] when it is zero.
pub fn display_count(count: usize) -> String {
    if count == 0 {
        NO_DATA.to_string()
    } else {
        count.to_string()
    }
}

/// Render an optional value, or [`NO_DATA`] when absent.
pub fn display_opt<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}

/// Render an average rounded to `precision` decimals, or [`NO_DATA`] when zero.
pub fn display_average(value: f64, precision: usize) -> String {
    if value == 0.0 {
        NO_DATA.to_string()
    } else {
        format!("{value:.precision$}")
    }
}

/// Print a `label: value` line, with the label colored when stdout supports it.
pub(crate) fn print_row(label: &str, value: &str) {
    let label = format!("{label}:");
    println!(
        "{} {value}",
        label.if_supports_color(Stream::Stdout, |l| l.cyan())
    );
}
