//! Brace-block tracking.
//!
//! A [`CurlyParser`] is fed the tokens of one `{ ... }` block, one at a time,
//! and reports the moment the outermost brace pair closes. Braces inside
//! string literals, character literals and comments are not counted.

use super::tokens::TokenKind;
use super::types::Token;

/// The structure the parser is currently inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum InsideState {
    #[default]
    None,
    /// Between double quotes
    String,
    /// Between single quotes
    Character,
    /// After `//`, until the end of the line
    LineComment,
    /// Between `/*` and `*/`
    BlockComment,
}

/// State machine for a single brace block.
///
/// The inside state is updated for each token before the token's effect on
/// the brace counter is applied; braces only count while the state is
/// [`InsideState::None`].
#[derive(Debug, Default)]
pub struct CurlyParser {
    inside: InsideState,
    open_braces: u32,
    opened: bool,
    // The previous token ended in an unescaped backslash
    escape_next: bool,
}

impl CurlyParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next token of the block.
    ///
    /// Returns true once the first `{` seen has been matched by its `}`.
    pub fn parse_token(&mut self, token: &Token<'_>) -> bool {
        let escaped = std::mem::replace(&mut self.escape_next, ends_in_escape(token.text));

        match (token.kind, self.inside) {
            (TokenKind::DoubleQuote, InsideState::None) => self.inside = InsideState::String,
            (TokenKind::DoubleQuote, InsideState::String) if !escaped => {
                self.inside = InsideState::None
            }
            (TokenKind::SingleQuote, InsideState::None) => self.inside = InsideState::Character,
            (TokenKind::SingleQuote, InsideState::Character) if !escaped => {
                self.inside = InsideState::None
            }
            (TokenKind::LineComment, InsideState::None) => self.inside = InsideState::LineComment,
            (TokenKind::BlockCommentStart, InsideState::None) => {
                self.inside = InsideState::BlockComment
            }
            (TokenKind::BlockCommentEnd, InsideState::BlockComment) => {
                self.inside = InsideState::None
            }
            (TokenKind::Newline, InsideState::LineComment) => self.inside = InsideState::None,
            (TokenKind::OpenBrace, InsideState::None) => {
                self.open_braces += 1;
                self.opened = true;
            }
            (TokenKind::CloseBrace, InsideState::None) => {
                self.open_braces = self.open_braces.saturating_sub(1);
            }
            _ => {}
        }

        self.is_done()
    }

    /// Whether the outermost block has closed.
    pub fn is_done(&self) -> bool {
        self.opened && self.open_braces == 0
    }

    #[cfg(test)]
    fn inside(&self) -> InsideState {
        self.inside
    }

    #[cfg(test)]
    fn open_braces(&self) -> u32 {
        self.open_braces
    }
}

/// Whether `text` ends in an odd run of backslashes.
fn ends_in_escape(text: &str) -> bool {
    text.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}
