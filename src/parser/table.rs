//! Token table files.
//!
//! Next to its fragments, a grammar directory can hold plain-text tables that
//! define tokens rather than productions:
//!
//! ```text
//! keywords.txt             SELECT: "SELECT"
//! operators.txt            EQ: "="
//! separators.txt           LPAREN: "("
//! identifiers.txt          IDENTIFIER: <LETTER> (<LETTER> | <DIGIT>)*
//! nonReservedKeywords.txt  ABSOLUTE
//! ```
//!
//! Tables may start with the license header, which is stripped before the
//! lines are read. Blank lines are skipped.

use crate::error::{DialectError, Result};

/// One `NAME: value` line of a token table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Token name, upper-cased.
    pub name: String,
    /// Token definition, verbatim apart from surrounding whitespace.
    pub value: String,
}

/// Drop the license header from the start of a table, if present.
pub fn strip_license<'a>(text: &'a str, license: Option<&str>) -> &'a str {
    license
        .filter(|l| !l.is_empty())
        .and_then(|l| text.strip_prefix(l))
        .unwrap_or(text)
}

/// Parse the `NAME: value` lines of a token table.
///
/// The line is split at its first colon, so values may contain colons.
pub fn parse_assignments(text: &str) -> Result<Vec<TableEntry>> {
    content_lines(text)
        .map(|(number, line)| {
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| DialectError::MalformedEntry {
                    line: number,
                    content: line.to_string(),
                })?;

            Ok(TableEntry {
                name: name.trim().to_uppercase(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}

/// Parse a list of keyword names, one per line, upper-cased.
pub fn parse_keyword_list(text: &str) -> Vec<String> {
    content_lines(text)
        .map(|(_, line)| line.to_uppercase())
        .collect()
}

/// Non-blank trimmed lines with their 1-indexed line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (u32, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i as u32 + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, value: &str) -> TableEntry {
        TableEntry {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_assignments() {
        let entries = parse_assignments("SELECT: \"SELECT\"\n\n  from :  \"FROM\"  \n").unwrap();

        assert_eq!(
            entries,
            vec![entry("SELECT", "\"SELECT\""), entry("FROM", "\"FROM\"")]
        );
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let entries = parse_assignments("DOUBLE_COLON: \"::\"\r\n").unwrap();

        assert_eq!(entries, vec![entry("DOUBLE_COLON", "\"::\"")]);
    }

    #[test]
    fn test_line_without_colon_fails() {
        let err = parse_assignments("SELECT: \"SELECT\"\n\nFROM \"FROM\"\n").unwrap_err();

        match err {
            DialectError::MalformedEntry { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "FROM \"FROM\"");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_keyword_list() {
        assert_eq!(
            parse_keyword_list("absolute\n\n  ACTION \nadd\n"),
            vec!["ABSOLUTE", "ACTION", "ADD"]
        );
        assert!(parse_keyword_list("\n  \n").is_empty());
    }

    #[test]
    fn test_strip_license() {
        let license = "<#-- license -->\n";
        let text = "<#-- license -->\nSELECT: \"SELECT\"\n";

        assert_eq!(strip_license(text, Some(license)), "SELECT: \"SELECT\"\n");
        assert_eq!(strip_license(text, None), text);
        assert_eq!(strip_license("FROM: \"FROM\"", Some(license)), "FROM: \"FROM\"");
        assert_eq!(strip_license(text, Some("")), text);
    }
}
