//! Common types for extracted productions.

use std::path::PathBuf;

use super::span::Span;
use super::tokens::TokenKind;

/// A contiguous slice of fragment text, classified by its literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the first character of `text` in the source
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, offset: usize) -> Self {
        Self { kind, text, offset }
    }

    /// Byte offset just past the end of this token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}

/// A matched production signature: `<kind> <name>(<args>) :`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionSignature {
    /// The declared production name (second identifier of the signature)
    pub name: String,
    /// The declared return type (first identifier of the signature)
    pub kind: String,
    /// Byte range of the signature, including an optional trailing newline
    pub span: Span,
}

/// A named grammar production: the signature plus its initializer and body
/// blocks, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub name: String,
    pub kind: String,
    /// Full verbatim text from the start of the signature to the closing
    /// brace of the body block
    pub text: String,
    /// Byte range of `text` within the fragment it was read from
    pub span: Span,
    /// The fragment file the production was read from, if any
    pub origin: Option<PathBuf>,
}

impl Production {
    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}
