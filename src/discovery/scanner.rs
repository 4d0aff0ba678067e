//! Directory listing for the hierarchy walk.
//!
//! Lists the immediate entries of one grammar directory, separating fragment
//! files and token tables from subdirectories. Entries are sorted by file name so repeated runs
//! visit files in the same order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DialectError, Result};
use crate::registry::TableKind;

/// Immediate contents of one directory.
#[derive(Debug, Default)]
pub(crate) struct DirectoryListing {
    /// Fragment files, sorted by name.
    pub fragments: Vec<PathBuf>,
    /// Token table files, sorted by name.
    pub tables: Vec<(TableKind, PathBuf)>,
    /// Subdirectories, sorted by name.
    pub subdirectories: Vec<PathBuf>,
}

impl DirectoryListing {
    /// Find the subdirectory with the given file name.
    pub(crate) fn subdirectory(&self, name: &std::ffi::OsStr) -> Option<&Path> {
        self.subdirectories
            .iter()
            .map(PathBuf::as_path)
            .find(|dir| dir.file_name() == Some(name))
    }
}

/// List the fragment files, token tables and subdirectories directly inside `dir`.
pub(crate) fn scan_directory(dir: &Path, extension: &str) -> Result<DirectoryListing> {
    let mut listing = DirectoryListing::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| DialectError::Io {
            path: e.path().unwrap_or(dir).to_path_buf(),
            message: format!("Failed to list directory: {}", e),
        })?;
        let path = entry.path();

        let table = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(TableKind::from_file_name);

        if entry.file_type().is_dir() {
            listing.subdirectories.push(path.to_path_buf());
        } else if let Some(kind) = table {
            listing.tables.push((kind, path.to_path_buf()));
        } else if is_fragment(path, extension) {
            listing.fragments.push(path.to_path_buf());
        }
    }

    Ok(listing)
}

/// Whether `path` names a fragment file with the given extension.
///
/// Only the final extension counts, and dotfiles have none.
pub(crate) fn is_fragment(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == extension)
}
