//! Parsing of grammar fragment files.
//!
//! A fragment file is template text containing any number of productions:
//!
//! ```text
//! SqlNode SqlStatement() :
//! {
//!     SqlNode stmt;
//! }
//! {
//!     stmt = QueryOrExpr() { return stmt; }
//! }
//! ```
//!
//! Only the structure needed to find block boundaries is understood: quotes,
//! character literals, comments and braces. Everything else is opaque text.
//!
//! Token tables (`keywords.txt` and friends) are parsed by [`table`].
//!
//! # Usage
//!
//! ```ignore
//! use dialect::parser::parse_productions;
//!
//! let source = std::fs::read_to_string("parsing/base.ftl")?;
//! for production in parse_productions(&source)? {
//!     println!("{} ({} bytes)", production.name, production.text.len());
//! }
//! ```

pub mod curly;
pub mod declaration;
mod fragment;
pub mod span;
pub mod table;
pub mod tokens;
pub mod types;

pub use curly::CurlyParser;
pub use declaration::{find_signatures, signatures};
pub use fragment::parse_productions;
pub use span::{Location, Span};
pub use table::{parse_assignments, parse_keyword_list, strip_license, TableEntry};
pub use tokens::{tokenize, TokenKind, Tokens};
pub use types::{Production, ProductionSignature, Token};
