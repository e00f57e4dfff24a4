//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("TEXTMETRICS_PRECISION")
        .env("NO_COLOR", "1");
    cmd
}

const ARTICLE: &str = "The council met on Monday. The vote was close!\n\n\
                       Residents asked why. The council did not answer?\n\n\n\
                       Coverage continues.";

fn file_with(content: &str) -> NamedTempFile {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), content).unwrap();
    tmp
}

fn path_of(tmp: &NamedTempFile) -> &str {
    tmp.path().to_str().unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn no_arguments_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().args(["info", "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_prints_all_metrics() {
    let tmp = file_with(ARTICLE);
    cmd()
        .args(["--color", "never", "analyze", path_of(&tmp), "--word", "council"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Text Analysis Results ---"))
        .stdout(predicate::str::contains("Occurrences of 'council': 2"))
        .stdout(predicate::str::contains("Most common word: the"))
        .stdout(predicate::str::contains("Number of paragraphs: 3"))
        .stdout(predicate::str::contains("Number of sentences: 5"));
}

#[test]
fn analyze_rounds_average_to_precision() {
    let tmp = file_with("a bb ccc dddd");
    cmd()
        .args(["--color", "never", "analyze", path_of(&tmp), "--precision", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average word length: 2.500"));
}

#[test]
fn analyze_empty_file_shows_no_data() {
    let tmp = file_with("");
    cmd()
        .args(["--color", "never", "analyze", path_of(&tmp), "-w", "cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Occurrences of 'cat': no data found"))
        .stdout(predicate::str::contains("Most common word: no data found"))
        .stdout(predicate::str::contains("Average word length: no data found"))
        .stdout(predicate::str::contains("Number of paragraphs: 1"))
        .stdout(predicate::str::contains("Number of sentences: 1"));
}

#[test]
fn analyze_json_outputs_report() {
    let tmp = file_with(ARTICLE);
    let output = cmd()
        .args(["analyze", path_of(&tmp), "--word", "vote", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["word"], "vote");
    assert_eq!(json["word_count"], 1);
    assert_eq!(json["paragraphs"], 3);
    assert_eq!(json["sentences"], 5);
    assert_eq!(json["most_common_word"], "the");
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/article.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Count
// =============================================================================

#[test]
fn count_respects_word_boundaries() {
    let tmp = file_with("Category cat cats CAT.");
    cmd()
        .args(["--color", "never", "count", path_of(&tmp), "cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Occurrences of 'cat': 2"));
}

#[test]
fn count_zero_shows_no_data() {
    let tmp = file_with("The dog barked.");
    cmd()
        .args(["--color", "never", "count", path_of(&tmp), "cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no data found"));
}

#[test]
fn count_json() {
    let tmp = file_with("a.b axb a.b");
    cmd()
        .args(["count", path_of(&tmp), "a.b", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 2"));
}

// =============================================================================
// Frequencies
// =============================================================================

#[test]
fn frequencies_lists_top_words() {
    let tmp = file_with("the cat and the dog and the bird");
    cmd()
        .args(["--color", "never", "frequencies", path_of(&tmp), "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3  the"))
        .stdout(predicate::str::contains("2  and"))
        .stdout(predicate::str::contains("cat").not());
}

#[test]
fn frequencies_empty_file_shows_no_data() {
    let tmp = file_with("   ");
    cmd()
        .args(["frequencies", path_of(&tmp)])
        .assert()
        .success()
        .stdout(predicate::str::contains("no data found"));
}

// =============================================================================
// Interactive
// =============================================================================

#[test]
fn interactive_reprompts_then_reports() {
    let tmp = file_with(ARTICLE);
    cmd()
        .args(["--color", "never", "interactive"])
        .write_stdin(format!(
            "/nonexistent/article.txt\n{}\ncouncil\n",
            path_of(&tmp)
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: File not found: /nonexistent/article.txt",
        ))
        .stdout(predicate::str::contains("Occurrences of 'council': 2"))
        .stdout(predicate::str::contains("Number of sentences: 5"));
}

#[test]
fn interactive_blank_word_still_reports_occurrences() {
    let tmp = file_with(ARTICLE);
    cmd()
        .args(["--color", "never", "interactive"])
        .write_stdin(format!("{}\n\n", path_of(&tmp)))
        .assert()
        .success()
        .stdout(predicate::str::contains("Occurrences of '': no data found"));
}

#[test]
fn interactive_exits_cleanly_on_eof() {
    cmd()
        .arg("interactive")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the path"));
}

// =============================================================================
// Input limit
// =============================================================================

#[test]
fn oversized_input_is_rejected() {
    let tmp = file_with(&"word ".repeat(100));
    // extensionless config files are read as TOML
    let config = file_with("max_input_bytes = 10\n");

    cmd()
        .args(["--config", path_of(&config), "analyze", path_of(&tmp)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_limit_accepts_large_input() {
    let tmp = file_with(&"word ".repeat(100));
    let config = file_with("max_input_bytes = 10\ndisable_input_limit = true\n");

    cmd()
        .args(["--config", path_of(&config), "count", path_of(&tmp), "word"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100"));
}
