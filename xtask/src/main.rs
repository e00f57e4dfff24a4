//! Build automation for textmetrics.
//!
//! Run with `cargo xtask <command>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for textmetrics")]
struct Xtask {
    #[command(subcommand)]
    command: Task,

    /// Output directory (defaults to target/dist)
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completion scripts
    Completions {
        /// Only generate for this shell
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
    /// Generate man pages for the CLI and each subcommand
    Man,
    /// Generate completions and man pages
    Dist,
}

fn main() -> anyhow::Result<()> {
    let xtask = Xtask::parse();
    let out_dir = xtask.out_dir.unwrap_or_else(default_out_dir);

    match xtask.command {
        Task::Completions { shell } => completions(&out_dir, shell),
        Task::Man => man_pages(&out_dir),
        Task::Dist => {
            completions(&out_dir, None)?;
            man_pages(&out_dir)
        }
    }
}

fn default_out_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("target"), |root| root.join("target"))
        .join("dist")
}

fn completions(out_dir: &Path, only: Option<Shell>) -> anyhow::Result<()> {
    let dir = out_dir.join("completions");
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let shells = only.map_or_else(
        || vec![Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish],
        |shell| vec![shell],
    );
    let mut cmd = textmetrics::command();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "textmetrics", &dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn man_pages(out_dir: &Path) -> anyhow::Result<()> {
    let dir = out_dir.join("man");
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let cmd = textmetrics::command();
    write_man(&dir, "textmetrics", cmd.clone())?;
    for sub in cmd.get_subcommands() {
        let name = format!("textmetrics-{}", sub.get_name());
        write_man(&dir, &name, sub.clone().name(name.clone()))?;
    }
    Ok(())
}

fn write_man(dir: &Path, name: &str, cmd: clap::Command) -> anyhow::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buffer)
        .with_context(|| format!("failed to render man page for {name}"))?;
    let path = dir.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
