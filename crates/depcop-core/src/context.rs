//! Context passed to single-unit analysis.

use std::path::{Path, PathBuf};

/// Resolved semantic information for one source file.
///
/// This is what an analyzer needs beyond the raw syntax tree: which module
/// the file belongs to and where it sits relative to the project root.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Module path from crate root (e.g., `["crate", "app", "handler"]`).
    pub module_path: Vec<String>,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        let module_path = Self::compute_module_path(&relative_path);

        Self {
            path,
            content,
            module_path,
            relative_path,
        }
    }

    /// Computes the module path from a relative file path.
    fn compute_module_path(relative_path: &Path) -> Vec<String> {
        let mut parts: Vec<String> = relative_path
            .with_extension("")
            .components()
            .filter_map(|c| {
                if let std::path::Component::Normal(s) = c {
                    s.to_str().map(String::from)
                } else {
                    None
                }
            })
            .collect();

        // Remove "mod" or "lib" from the path
        if let Some(last) = parts.last() {
            if last == "mod" || last == "lib" {
                parts.pop();
            }
        }

        // Prepend "crate" for the module path
        if !parts.is_empty() {
            parts.insert(0, "crate".to_string());
        }

        parts
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// Both `line` and `column` are 1-indexed; returns 0 if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in self.content.lines().enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len() + 1; // +1 for newline
        }

        offset
    }
}
