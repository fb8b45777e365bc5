//! Testing utilities for bear2obsidian
//!
//! This module provides helper types and functions for writing tests,
//! including a `TestExport` wrapper that lays out a throwaway Bear export.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary export directory that is removed on drop
///
/// # Examples
/// ```ignore
/// let export = TestExport::new();
/// export.note("Groceries.md", "#home\n- milk\n");
/// export.attachments("Groceries", &["receipt.png"]);
/// ```
pub struct TestExport {
    dir: TempDir,
}

impl TestExport {
    /// Create an empty export directory
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temporary export directory"),
        }
    }

    /// Root of the export
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a note at the top level of the export
    pub fn note(&self, name: &str, content: &str) -> PathBuf {
        write_file(self.path(), name, content)
    }

    /// Create a per-note attachments folder holding the given files
    pub fn attachments(&self, name: &str, files: &[&str]) -> PathBuf {
        let dir = self.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create attachments folder");
        for file in files {
            write_file(&dir, file, "binary");
        }
        dir
    }
}

impl Default for TestExport {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `content` to `dir/name` and return the full path
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_cleanup() {
        let root;
        {
            let export = TestExport::new();
            root = export.path().to_path_buf();
            export.note("a.md", "text");
            assert!(root.join("a.md").exists());
        }

        assert!(!root.exists());
    }

    #[test]
    fn test_attachments_folder_layout() {
        let export = TestExport::new();
        let dir = export.attachments("Trip", &["map.png", "ticket.pdf"]);

        assert!(dir.join("map.png").is_file());
        assert!(dir.join("ticket.pdf").is_file());
    }
}
