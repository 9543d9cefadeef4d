use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::exclude::ExclusionSet;
use crate::tree::{SortOrder, TreeConfig};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "estructura",
    version,
    about = "Write a directory tree listing to a text file",
    after_help = "Examples:\n  estructura\n  estructura src -o src-tree.txt\n  estructura -I target -I dist\n  estructura --no-default-excludes --unsorted"
)]
pub struct Args {
    /// Directory to list (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File to write the listing to
    #[arg(short = 'o', long = "output", default_value = "estructura.txt")]
    pub output: PathBuf,

    /// Directory name to skip, in addition to the defaults (repeatable)
    #[arg(short = 'I', long = "exclude", value_name = "NAME", action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Do not skip .git, __pycache__, node_modules, venv and next
    #[arg(long = "no-default-excludes")]
    pub no_default_excludes: bool,

    /// Keep filesystem order instead of sorting by name
    #[arg(long = "unsorted")]
    pub unsorted: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress logs and the summary line
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Build the run configuration.
    ///
    /// Rejects exclusion names that could never equal a base name.
    pub fn tree_config(&self) -> Result<TreeConfig> {
        for name in &self.exclude {
            anyhow::ensure!(!name.is_empty(), "exclusion name must not be empty");
            anyhow::ensure!(
                !name.contains(std::path::is_separator),
                "{name}: exclusion names are folder names, not paths"
            );
        }

        let mut excluded = if self.no_default_excludes {
            ExclusionSet::new()
        } else {
            ExclusionSet::defaults()
        };
        excluded.extend(self.exclude.iter().cloned());

        Ok(TreeConfig {
            root: self.path.clone(),
            excluded,
            output: self.output.clone(),
            sort: if self.unsorted {
                SortOrder::Native
            } else {
                SortOrder::Name
            },
        })
    }
}
