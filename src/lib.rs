//! dialect - Grammar production extraction for SQL dialect parsers
//!
//! Reads named grammar productions out of template fragment files and merges
//! them along a directory hierarchy, so that a dialect directory inherits the
//! productions of its ancestors and can override any of them. Token tables
//! (keywords, operators, separators, identifiers and non-reserved keywords)
//! are merged the same way.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod registry;
pub mod render;

pub use discovery::{
    extract_productions, traversal_path, Extraction, ExtractOptions, Manifest, SourceFile, TableSource,
};
pub use error::{DialectError, Result};
pub use parser::{parse_productions, tokenize, CurlyParser, Production, ProductionSignature, Token, TokenKind};
pub use registry::{Keyword, KeywordRegistry, ProductionRegistry, TableKind, TokenTables};
pub use render::{
    render_entries, render_json, render_non_reserved, render_productions, render_token_assignment,
    write_output,
};
