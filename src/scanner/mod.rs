mod filter;

pub use filter::{FileFilter, SegmentFilter, default_deny_segments};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StyleGateError};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if any entry cannot be enumerated.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    recursive: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            recursive: true,
        }
    }

    #[must_use]
    pub const fn with_recursion(filter: F, recursive: bool) -> Self {
        Self { filter, recursive }
    }

    fn scan_impl(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut walker = WalkDir::new(root).sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            // Enumeration failures abort the whole run; no best-effort mode.
            let entry = entry.map_err(|e| StyleGateError::Scan {
                path: root.to_path_buf(),
                source: e,
            })?;
            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.scan_impl(root)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
