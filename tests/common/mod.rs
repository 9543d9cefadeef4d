#![allow(dead_code)]

use estructura::tree::{root_display_name, BRANCH};
use estructura::{collect_tree, ExclusionSet, SortOrder, TreeConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

pub fn no_excludes() -> ExclusionSet {
    ExclusionSet::new()
}

pub fn excludes(names: &[&str]) -> ExclusionSet {
    names.iter().copied().collect()
}

/// Rendered lines for `root`, sorted by name.
pub fn listing(root: &Path, excluded: &ExclusionSet) -> Vec<String> {
    collect_tree(root, excluded, SortOrder::Name)
        .unwrap()
        .iter()
        .map(|l| l.render())
        .collect()
}

/// The rendered root line for a fixture directory.
pub fn root_line(root: &Path) -> String {
    format!("{BRANCH}{}/", root_display_name(root))
}

/// Config writing into a separate directory so the output file never shows
/// up in its own listing.
pub fn config_for(root: &Path, out_dir: &TempDir, excluded: ExclusionSet) -> TreeConfig {
    TreeConfig {
        root: root.to_path_buf(),
        excluded,
        output: out_dir.path().join("estructura.txt"),
        sort: SortOrder::Name,
    }
}
