//! Tree traversal, line layout, and writing the listing to a file.

mod layout;
pub(crate) mod walk;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::exclude::ExclusionSet;

pub use layout::{root_display_name, BRANCH, INDENT};
pub use walk::{collect_tree, walk_tree};

/// Whether an entry is rendered as a directory or as a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Dir,
    File,
}

/// A single line of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeLine {
    /// Number of indent units before the branch marker.
    pub depth: usize,
    /// Base name (or the root as given, for a root with no base name).
    pub name: String,
    pub kind: EntryKind,
}

/// Order of siblings within a directory.
///
/// Files always come before subdirectories regardless of the order chosen,
/// so a directory's files are listed right under it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Byte-wise by name. Output is reproducible across runs.
    #[default]
    Name,
    /// Whatever order the filesystem enumerates entries in.
    Native,
}

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Directory to list.
    pub root: PathBuf,
    /// Directory base names to skip along with their contents.
    pub excluded: ExclusionSet,
    /// File the listing is written to (created or truncated).
    pub output: PathBuf,
    pub sort: SortOrder,
}

/// Counts of what was written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub dirs: usize,
    pub files: usize,
}

impl TreeStats {
    fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Dir => self.dirs += 1,
            EntryKind::File => self.files += 1,
        }
    }
}

/// Write the listing for `root` into `out`, one line per entry.
///
/// Stops at the first traversal or write error; lines written before it stay
/// in `out`.
pub fn write_tree<W: Write>(
    root: &Path,
    excluded: &ExclusionSet,
    sort: SortOrder,
    out: &mut W,
) -> Result<TreeStats> {
    let mut stats = TreeStats::default();
    for line in walk_tree(root, excluded, sort)? {
        let line = line?;
        writeln!(out, "{}", line.render()).context("failed to write tree line")?;
        stats.record(line.kind);
    }
    Ok(stats)
}

/// Write the listing described by `config` to `config.output`.
///
/// The output file is opened before traversal starts and closed when this
/// returns, on success or error.
pub fn run(config: &TreeConfig) -> Result<TreeStats> {
    let file = File::create(&config.output).with_context(|| {
        format!(
            "{}: failed to create output file",
            config.output.display()
        )
    })?;
    let mut out = BufWriter::new(file);

    tracing::debug!(
        root = %config.root.display(),
        output = %config.output.display(),
        excluded = %config.excluded,
        sort = ?config.sort,
        "writing tree"
    );

    let result = write_tree(&config.root, &config.excluded, config.sort, &mut out);
    // Keep whatever was produced before a failure.
    let flushed = out
        .flush()
        .with_context(|| format!("{}: failed to flush output", config.output.display()));

    let stats = result?;
    flushed?;

    tracing::info!(dirs = stats.dirs, files = stats.files, "tree written");
    Ok(stats)
}

/// The line printed on stdout after a successful run.
pub fn summary_line(config: &TreeConfig) -> String {
    format!(
        "Estructura guardada en '{}' (excluyendo carpetas: {})",
        config.output.display(),
        config.excluded
    )
}
