#![forbid(unsafe_code)]
//! Writes shell completions and the `estructura.1` man page.
//!
//! Usage: `generate-assets [OUT_DIR]` (default `dist`).

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use estructura::cli::Args;
use std::fs;
use std::path::{Path, PathBuf};

const SHELLS: [Shell; 4] = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let mut written = write_completions(&out_dir.join("completions"))?;
    written.push(write_man_page(&out_dir.join("man"))?);

    for path in &written {
        eprintln!("estructura: wrote {}", path.display());
    }
    Ok(())
}

fn write_completions(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("{}: failed to create", dir.display()))?;
    let mut cmd = Args::command();
    SHELLS
        .into_iter()
        .map(|shell| {
            generate_to(shell, &mut cmd, "estructura", dir)
                .with_context(|| format!("failed to generate {shell} completions"))
        })
        .collect()
}

fn write_man_page(dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("{}: failed to create", dir.display()))?;
    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let path = dir.join("estructura.1");
    fs::write(&path, page).with_context(|| format!("{}: failed to write", path.display()))?;
    Ok(path)
}
