#![forbid(unsafe_code)]
//! Estructura — writes an indented directory tree listing to a text file.

pub mod cli;
pub mod exclude;
pub mod logging;
pub mod tree;

pub use exclude::{ExclusionSet, DEFAULT_EXCLUDES};
pub use tree::{
    collect_tree, run, summary_line, walk_tree, write_tree, EntryKind, SortOrder, TreeConfig,
    TreeLine, TreeStats,
};
