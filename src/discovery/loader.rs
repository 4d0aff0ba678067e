//! Fragment loader - reads one fragment or token table into the registries.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DialectError, Result};
use crate::parser::{parse_assignments, parse_keyword_list, parse_productions, strip_license, Production};
use crate::registry::{Keyword, ProductionRegistry, TableKind, TokenTables};

/// What one fragment file contributed to an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The fragment file.
    pub path: PathBuf,
    /// Number of productions defined in the file.
    pub productions: usize,
    /// Names whose earlier definition this file replaced, in file order.
    pub overridden: Vec<String>,
}

/// What one token table file contributed to an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    /// The table file.
    pub path: PathBuf,
    pub kind: TableKind,
    /// Number of entries in the file.
    pub entries: usize,
    /// Tokens whose earlier definition this file replaced, in file order.
    pub overridden: Vec<String>,
}

fn read_text(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| DialectError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read {}: {}", what, e),
    })
}

/// Read and parse a fragment file.
///
/// Each production records the file as its origin. Errors are wrapped with
/// the file path.
pub fn read_fragment(path: &Path) -> Result<Vec<Production>> {
    let source = read_text(path, "fragment")?;

    let productions = parse_productions(&source).map_err(|e| e.in_file(path))?;

    Ok(productions
        .into_iter()
        .map(|p| p.with_origin(path))
        .collect())
}

/// Read a fragment file and merge its productions into `registry`.
pub fn load_fragment(path: &Path, registry: &mut ProductionRegistry) -> Result<SourceFile> {
    let productions = read_fragment(path)?;
    let count = productions.len();

    let overridden = productions
        .into_iter()
        .filter_map(|p| registry.insert(p))
        .map(|old| old.name)
        .collect();

    Ok(SourceFile {
        path: path.to_path_buf(),
        productions: count,
        overridden,
    })
}

/// Read a token table and merge its entries into `tokens`.
///
/// A leading `license` header is skipped. Entries record the file as their
/// origin.
pub fn load_table(
    path: &Path,
    kind: TableKind,
    license: Option<&str>,
    tokens: &mut TokenTables,
) -> Result<TableSource> {
    let text = read_text(path, "token table")?;
    let text = strip_license(&text, license);

    let Some(table) = tokens.assignments_mut(kind) else {
        let names = parse_keyword_list(text);
        for name in &names {
            tokens.non_reserved.insert(name, path);
        }
        return Ok(TableSource {
            path: path.to_path_buf(),
            kind,
            entries: names.len(),
            overridden: Vec::new(),
        });
    };

    let entries = parse_assignments(text).map_err(|e| e.in_file(path))?;
    let count = entries.len();

    let overridden = entries
        .into_iter()
        .filter_map(|entry| table.insert(Keyword::new(&entry.name, entry.value).with_origin(path)))
        .map(|old| old.name)
        .collect();

    Ok(TableSource {
        path: path.to_path_buf(),
        kind,
        entries: count,
        overridden,
    })
}
