//! Hierarchy walk and production extraction.
//!
//! A grammar tree has a root directory with common fragments and nested
//! dialect directories that refine them:
//!
//! ```text
//! parsing/
//!   base.ftl
//!   intermediate/
//!     common.ftl
//!     dialects/
//!       mysql/
//!         mysql.ftl
//!         keywords.txt
//! ```
//!
//! Extracting for `parsing/intermediate/dialects/mysql` reads the fragments
//! and token tables of every directory on the path from the root down to the
//! dialect, files before subdirectories. A production or token defined again
//! further down replaces the earlier definition.
//!
//! # Example
//!
//! ```ignore
//! use dialect::discovery::{extract_productions, ExtractOptions};
//!
//! let extraction = extract_productions(root, dialect, &ExtractOptions::default())?;
//! println!("Merged {} productions", extraction.productions.len());
//! ```

mod loader;
mod manifest;
mod scanner;

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{DialectError, Result};
use crate::parser::{Production, Span};
use crate::registry::{ProductionRegistry, TokenTables};
use crate::render::{render_non_reserved, NON_RESERVED_PRODUCTION};

use scanner::scan_directory;

pub use loader::{load_fragment, load_table, read_fragment, SourceFile, TableSource};
pub use manifest::{Manifest, DEFAULT_LICENSE, MANIFEST_FILENAME};

/// Extension of fragment files when none is configured.
pub const DEFAULT_EXTENSION: &str = "ftl";

/// Options for extracting productions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Extension of fragment files, without the dot.
    pub extension: String,

    /// License header that token tables start with.
    pub license: Option<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }
}

impl ExtractOptions {
    pub fn with_extension(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
            license: None,
        }
    }

    pub fn with_license(mut self, license: Option<String>) -> Self {
        self.license = license;
        self
    }
}

/// Result of extracting the productions of one dialect.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Merged productions, most specific definition winning.
    pub productions: ProductionRegistry,

    /// Merged token tables, most specific definition winning.
    pub tokens: TokenTables,

    /// Fragment files in the order they were read.
    pub sources: Vec<SourceFile>,

    /// Token table files in the order they were read.
    pub tables: Vec<TableSource>,
}

impl Extraction {
    /// Total number of overrides across all fragment and table files.
    pub fn override_count(&self) -> usize {
        let productions: usize = self.sources.iter().map(|s| s.overridden.len()).sum();
        let tokens: usize = self.tables.iter().map(|t| t.overridden.len()).sum();
        productions + tokens
    }
}

/// Compute the directory names leading from `root` down to `dialect`.
///
/// Returns an empty path when `dialect` is `root` itself.
pub fn traversal_path(root: &Path, dialect: &Path) -> Result<Vec<OsString>> {
    let relative = match dialect.strip_prefix(root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => canonical_relative(root, dialect)?,
    };

    relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| match c {
            Component::Normal(segment) => Ok(segment.to_os_string()),
            other => Err(DialectError::PathResolution {
                message: format!(
                    "Unsupported path component {:?} between {} and {}",
                    other.as_os_str(),
                    root.display(),
                    dialect.display()
                ),
                help: Some("Pass the dialect directory without `..` segments".to_string()),
            }),
        })
        .collect()
}

/// Retry the prefix check on canonical paths (symlinks, relative inputs).
fn canonical_relative(root: &Path, dialect: &Path) -> Result<PathBuf> {
    let not_descendant = || DialectError::PathResolution {
        message: format!(
            "{} is not inside {}",
            dialect.display(),
            root.display()
        ),
        help: Some("The dialect directory must be a descendant of the root grammar directory".to_string()),
    };

    let root = root.canonicalize().map_err(|_| not_descendant())?;
    let dialect = dialect.canonicalize().map_err(|_| not_descendant())?;

    dialect
        .strip_prefix(&root)
        .map(Path::to_path_buf)
        .map_err(|_| not_descendant())
}

/// Extract the merged productions for the dialect directory `dialect`.
///
/// Walks from `root` toward `dialect`, reading every fragment file and token
/// table in each directory on the way before descending into the next
/// directory of the path. Sibling directories off the path are never visited.
///
/// When any non-reserved keywords were listed, a production accepting each
/// of them is added under [`NON_RESERVED_PRODUCTION`].
pub fn extract_productions(
    root: &Path,
    dialect: &Path,
    options: &ExtractOptions,
) -> Result<Extraction> {
    let path = traversal_path(root, dialect)?;
    let mut extraction = Extraction::default();

    traverse(root, &path, options, &mut extraction)?;

    if let Some(text) = render_non_reserved(&extraction.tokens.non_reserved) {
        extraction.productions.insert(Production {
            name: NON_RESERVED_PRODUCTION.to_string(),
            kind: "String".to_string(),
            span: Span::new(0, text.len()),
            text,
            origin: None,
        });
    }

    Ok(extraction)
}

fn traverse(
    directory: &Path,
    remaining: &[OsString],
    options: &ExtractOptions,
    extraction: &mut Extraction,
) -> Result<()> {
    let listing = scan_directory(directory, &options.extension)?;

    for fragment in &listing.fragments {
        let source = load_fragment(fragment, &mut extraction.productions)?;
        extraction.sources.push(source);
    }

    for (kind, table) in &listing.tables {
        let source = load_table(
            table,
            *kind,
            options.license.as_deref(),
            &mut extraction.tokens,
        )?;
        extraction.tables.push(source);
    }

    let Some((next, rest)) = remaining.split_first() else {
        return Ok(());
    };

    let child = listing.subdirectory(next).ok_or_else(|| DialectError::PathResolution {
        message: format!(
            "Directory {:?} not found in {}",
            next,
            directory.display()
        ),
        help: None,
    })?;

    traverse(child, rest, options, extraction)
}
