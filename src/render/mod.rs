//! Rendering of merged productions and token tables.
//!
//! Turns an [`Extraction`] into text for the downstream template and
//! parser-generator stages, or into listings for inspection.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::discovery::Extraction;
use crate::error::{DialectError, Result};
use crate::registry::{KeywordRegistry, KeywordSet, ProductionRegistry};

/// Name of the production generated from the non-reserved keyword list.
pub const NON_RESERVED_PRODUCTION: &str = "NonReservedKeyWord";

/// Lexical states the generated token assignments apply to.
const TOKEN_STATES: &str = "<DEFAULT, DQID, BTID>";

/// Render the merged grammar file.
///
/// The license header comes first, then one token assignment per non-empty
/// table (keywords, operators, separators, identifiers), then every
/// production in registry order. Each block is surrounded by newlines.
pub fn render_productions(extraction: &Extraction, license: Option<&str>) -> String {
    let mut content = String::from(license.unwrap_or_default());

    let assignments = extraction
        .tokens
        .assignments()
        .into_iter()
        .filter_map(|(_, table)| render_token_assignment(table));
    let productions = extraction.productions.iter().map(|p| p.text.clone());

    for block in assignments.chain(productions) {
        content.push('\n');
        content.push_str(&block);
        content.push('\n');
    }

    content
}

/// Render one token table as a token assignment, or `None` when empty.
///
/// ```text
/// <DEFAULT, DQID, BTID> TOKEN :
/// {
///     < SELECT: "SELECT" >
/// |   < FROM: "FROM" >
/// }
/// ```
pub fn render_token_assignment(table: &KeywordRegistry) -> Option<String> {
    if table.is_empty() {
        return None;
    }

    let entries: Vec<String> = table
        .iter()
        .enumerate()
        .map(|(i, k)| {
            let lead = if i == 0 { "    " } else { "|   " };
            format!("{lead}< {}: {} >", k.name, k.value)
        })
        .collect();

    Some(format!(
        "{TOKEN_STATES} TOKEN :\n{{\n{}\n}}",
        entries.join("\n")
    ))
}

/// Render the production accepting any non-reserved keyword, or `None` when
/// the list is empty.
pub fn render_non_reserved(keywords: &KeywordSet) -> Option<String> {
    if keywords.is_empty() {
        return None;
    }

    let alternatives: Vec<String> = keywords
        .names()
        .enumerate()
        .map(|(i, name)| {
            let lead = if i == 0 { "        " } else { "    |   " };
            format!("{lead}<{name}>")
        })
        .collect();

    Some(format!(
        "String {NON_RESERVED_PRODUCTION}() :\n{{\n}}\n{{\n    (\n{}\n    )\n    {{\n        return unquotedIdentifier();\n    }}\n}}",
        alternatives.join("\n")
    ))
}

/// Render `name=text` entries separated by blank lines.
pub fn render_entries(registry: &ProductionRegistry) -> String {
    registry
        .iter()
        .map(|p| format!("{}={}\n", p.name, p.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the registry as a JSON object of name to text, sorted by name.
pub fn render_json(registry: &ProductionRegistry) -> Result<String> {
    let map: BTreeMap<&str, &str> = registry
        .iter()
        .map(|p| (p.name.as_str(), p.text.as_str()))
        .collect();

    serde_json::to_string_pretty(&map).map_err(|e| DialectError::Render {
        message: format!("Failed to serialize productions: {}", e),
    })
}

/// Write rendered output, creating parent directories as needed.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DialectError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, content).map_err(|e| DialectError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })
}
