#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use estructura::cli::Args;
use estructura::{logging, tree};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("estructura: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    logging::init(args.verbose, args.quiet);

    let config = args.tree_config()?;

    let meta = std::fs::metadata(&config.root)
        .with_context(|| format!("{}: failed to resolve path", config.root.display()))?;
    anyhow::ensure!(meta.is_dir(), "{}: Not a directory", config.root.display());

    tree::run(&config)?;

    if !args.quiet {
        println!("{}", tree::summary_line(&config));
    }
    Ok(())
}
