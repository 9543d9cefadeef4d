use std::path::{Component, Path};

use super::{EntryKind, TreeLine};

/// One unit of indentation per level.
pub const INDENT: &str = "\u{2502}   "; // │
/// Marker placed before every name.
pub const BRANCH: &str = "\u{251c}\u{2500}\u{2500} "; // ├──

impl TreeLine {
    pub fn dir(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn file(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    /// Text of the line, without the trailing newline.
    ///
    /// Every entry gets the same `├── ` marker; last siblings are not
    /// distinguished. Directories carry a trailing `/`.
    pub fn render(&self) -> String {
        let suffix = match self.kind {
            EntryKind::Dir => "/",
            EntryKind::File => "",
        };
        let mut line = String::with_capacity(
            INDENT.len() * self.depth + BRANCH.len() + self.name.len() + suffix.len(),
        );
        for _ in 0..self.depth {
            line.push_str(INDENT);
        }
        line.push_str(BRANCH);
        line.push_str(&self.name);
        line.push_str(suffix);
        line
    }
}

/// Name shown on the root line.
///
/// The last component when it is a regular name, otherwise the path as given,
/// so `.` shows as `./` and `/` as `//`.
pub fn root_display_name(root: &Path) -> String {
    match root.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        _ => root.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_dir_line_has_no_indent() {
        assert_eq!(TreeLine::dir(0, ".").render(), "├── ./");
    }

    #[test]
    fn nested_file_line() {
        assert_eq!(
            TreeLine::file(3, "file.txt").render(),
            "│   │   │   ├── file.txt"
        );
    }

    #[test]
    fn dir_line_has_trailing_slash() {
        assert_eq!(TreeLine::dir(1, "sub").render(), "│   ├── sub/");
    }

    #[test]
    fn root_name_uses_last_component() {
        assert_eq!(root_display_name(Path::new("/home/user/project")), "project");
        assert_eq!(root_display_name(Path::new("project/")), "project");
    }

    #[test]
    fn root_name_without_normal_component() {
        assert_eq!(root_display_name(Path::new(".")), ".");
        assert_eq!(root_display_name(Path::new("..")), "..");
        assert_eq!(root_display_name(Path::new("/")), "/");
    }
}
