use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::layout::root_display_name;
use super::{SortOrder, TreeLine};
use crate::exclude::ExclusionSet;

/// Walk `root` depth-first, yielding one [`TreeLine`] per directory and file.
///
/// A directory's line is followed by its files, then by each of its
/// subdirectories in turn. Excluded directories are pruned before descent:
/// nothing under them is listed, and errors reading them are dropped along
/// with the subtree. Symlinks are never followed: a link to a directory is
/// left out entirely, excluded or not, while links to files and dangling
/// links are listed as files.
///
/// Fails up front if `root` is missing or not a directory. Errors hit while
/// reading further down are yielded and end the listing for the caller.
pub fn walk_tree(
    root: &Path,
    excluded: &ExclusionSet,
    sort: SortOrder,
) -> Result<impl Iterator<Item = Result<TreeLine>>> {
    let meta = fs::metadata(root)
        .with_context(|| format!("{}: failed to read directory", root.display()))?;
    anyhow::ensure!(meta.is_dir(), "{}: Not a directory", root.display());

    let root_name = root_display_name(root);
    let excluded = excluded.clone();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(move |a, b| sort_cmp(a, b, sort));

    // filter_entry prunes whole subtrees rather than hiding single lines.
    let iter = walker.into_iter().filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        if entry.path_is_symlink() {
            return !points_to_dir(entry);
        }
        if !entry.file_type().is_dir() {
            return true;
        }
        if excluded.contains_os(entry.file_name()) {
            tracing::trace!(path = %entry.path().display(), "skipping excluded directory");
            return false;
        }
        true
    });

    Ok(iter.map(move |entry_result| -> Result<TreeLine> {
        let entry = entry_result.map_err(walk_error)?;
        Ok(to_line(&entry, &root_name))
    }))
}

/// Collect the whole listing in memory.
pub fn collect_tree(root: &Path, excluded: &ExclusionSet, sort: SortOrder) -> Result<Vec<TreeLine>> {
    walk_tree(root, excluded, sort)?.collect()
}

/// Symlinks whose target is a directory. Dangling links resolve to `false`.
fn points_to_dir(entry: &DirEntry) -> bool {
    let is_dir = fs::metadata(entry.path()).is_ok_and(|m| m.is_dir());
    if is_dir {
        tracing::trace!(path = %entry.path().display(), "skipping symlinked directory");
    }
    is_dir
}

fn to_line(entry: &DirEntry, root_name: &str) -> TreeLine {
    let depth = entry.depth();
    if depth == 0 {
        tracing::debug!(path = %entry.path().display(), "visiting root");
        return TreeLine::dir(0, root_name);
    }

    let name = entry.file_name().to_string_lossy().into_owned();
    if entry.file_type().is_dir() {
        tracing::debug!(path = %entry.path().display(), depth, "visiting directory");
        TreeLine::dir(depth, name)
    } else {
        TreeLine::file(depth, name)
    }
}

fn walk_error(err: walkdir::Error) -> anyhow::Error {
    let path = err
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "???".to_string());
    anyhow::Error::new(err).context(format!("{path}: failed to read directory"))
}

/// Files before directories so a directory's files sit directly under its
/// line. Within each group, by name or left as enumerated.
fn sort_cmp(a: &DirEntry, b: &DirEntry, sort: SortOrder) -> Ordering {
    let by_kind = a.file_type().is_dir().cmp(&b.file_type().is_dir());
    match sort {
        SortOrder::Name => by_kind.then_with(|| a.file_name().cmp(b.file_name())),
        SortOrder::Native => by_kind,
    }
}
