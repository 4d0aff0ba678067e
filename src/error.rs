use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::parser::span::Location;

/// Main error type for dialect extraction
#[derive(Error, Diagnostic, Debug)]
pub enum DialectError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dialect::io))]
    Io { path: PathBuf, message: String },

    #[error("Production `{production}` at {location}: expected `{{` but found {found}")]
    #[diagnostic(
        code(dialect::structure),
        help("Each production signature must be followed by an initializer block and a body block")
    )]
    StructuralMismatch {
        production: String,
        found: String,
        location: Location,
    },

    #[error("Production `{production}` has a block opened at {location} that is never closed")]
    #[diagnostic(
        code(dialect::unterminated),
        help("Check for a missing closing brace or an unbalanced quote or comment")
    )]
    UnterminatedBlock {
        production: String,
        location: Location,
    },

    #[error("Line {line}: expected `NAME: value` but found {content:?}")]
    #[diagnostic(
        code(dialect::table),
        help("Token table lines separate the token name from its value with a colon")
    )]
    MalformedEntry { line: u32, content: String },

    #[error("Path error: {message}")]
    #[diagnostic(code(dialect::path))]
    PathResolution {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Manifest error: {message}")]
    #[diagnostic(code(dialect::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(dialect::render))]
    Render { message: String },

    #[error("{}: {source}", path.display())]
    #[diagnostic(code(dialect::fragment))]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<DialectError>,
    },
}

impl DialectError {
    /// Attach the fragment file path to an error raised while processing it.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        DialectError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through file context wrappers.
    pub fn root_cause(&self) -> &DialectError {
        match self {
            DialectError::InFile { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DialectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_file_wraps_and_unwraps() {
        let err = DialectError::UnterminatedBlock {
            production: "foo".to_string(),
            location: Location::new(4, 2, 1),
        }
        .in_file("/grammar/base.ftl");

        assert!(err.to_string().contains("base.ftl"));
        assert!(matches!(
            err.root_cause(),
            DialectError::UnterminatedBlock { production, .. } if production == "foo"
        ));
    }

    #[test]
    fn test_structural_mismatch_message() {
        let err = DialectError::StructuralMismatch {
            production: "bar".to_string(),
            found: "\"x\"".to_string(),
            location: Location::new(10, 3, 5),
        };

        assert_eq!(
            err.to_string(),
            "Production `bar` at 3:5: expected `{` but found \"x\""
        );
    }

    #[test]
    fn test_malformed_entry_message() {
        let err = DialectError::MalformedEntry {
            line: 3,
            content: "SELECT \"SELECT\"".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Line 3: expected `NAME: value` but found \"SELECT \\\"SELECT\\\"\""
        );
    }
}
