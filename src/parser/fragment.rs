//! Production extraction from a single fragment file.
//!
//! Every production is a signature followed by two brace blocks:
//!
//! ```text
//! <kind> <name>(<args>) :
//! {
//!     <initializer>
//! }
//! {
//!     <body>
//! }
//! ```
//!
//! Signatures are located once over the whole text, then a single forward
//! token cursor walks the file capturing each signature and its two blocks.

use crate::error::{DialectError, Result};

use super::curly::CurlyParser;
use super::declaration::signatures;
use super::span::{offset_to_location, Span};
use super::tokens::{tokenize, TokenKind, Tokens};
use super::types::{Production, ProductionSignature, Token};

/// Forward-only cursor over the tokens of one file.
///
/// A token that straddles a signature boundary is split there, so a capture
/// always starts and ends exactly on the boundary.
struct Cursor<'a> {
    tokens: Tokens<'a>,
    pending: Option<Token<'a>>,
    /// Byte offset of the next unconsumed character
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            tokens: tokenize(source),
            pending: None,
            offset: 0,
        }
    }

    fn peek(&mut self) -> Option<&Token<'a>> {
        if self.pending.is_none() {
            self.pending = self.tokens.next();
        }
        self.pending.as_ref()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.pending.take().or_else(|| self.tokens.next())?;
        self.offset = token.end();
        Some(token)
    }

    fn next_if(&mut self, predicate: impl FnOnce(&Token<'a>) -> bool) -> Option<Token<'a>> {
        match self.peek() {
            Some(token) if predicate(token) => self.next(),
            _ => None,
        }
    }

    /// Consume up to `target`, returning the consumed pieces.
    fn advance_to(&mut self, target: usize, mut consumed: impl FnMut(&'a str)) {
        while self.offset < target {
            let Some(token) = self.next() else { break };
            if token.end() > target {
                let split = target - token.offset;
                consumed(&token.text[..split]);
                self.pending = Some(Token::new(token.kind, &token.text[split..], target));
                self.offset = target;
            } else {
                consumed(token.text);
            }
        }
    }
}

/// Extract all productions from fragment text, in file order.
///
/// Signatures that start inside an already captured production (for
/// instance one quoted in a comment of a body block) are skipped.
pub fn parse_productions(source: &str) -> Result<Vec<Production>> {
    let mut cursor = Cursor::new(source);
    let mut productions = Vec::new();

    for signature in signatures(source) {
        if signature.span.start < cursor.offset {
            continue;
        }
        productions.push(capture_production(source, &mut cursor, signature)?);
    }

    Ok(productions)
}

fn capture_production(
    source: &str,
    cursor: &mut Cursor<'_>,
    signature: ProductionSignature,
) -> Result<Production> {
    cursor.advance_to(signature.span.start, |_| {});

    let mut text = String::new();
    cursor.advance_to(signature.span.end, |piece| text.push_str(piece));

    // Initializer block, then body block
    capture_block(source, cursor, &signature.name, &mut text)?;
    capture_block(source, cursor, &signature.name, &mut text)?;

    Ok(Production {
        name: signature.name,
        kind: signature.kind,
        text,
        span: Span::new(signature.span.start, cursor.offset),
        origin: None,
    })
}

/// Capture one `{ ... }` block, including any whitespace before it.
fn capture_block(
    source: &str,
    cursor: &mut Cursor<'_>,
    production: &str,
    text: &mut String,
) -> Result<()> {
    while let Some(token) = cursor.next_if(|t| t.is_whitespace()) {
        text.push_str(token.text);
    }

    let opening = match cursor.peek() {
        Some(token) if token.kind == TokenKind::OpenBrace => token.offset,
        Some(token) => {
            return Err(DialectError::StructuralMismatch {
                production: production.to_string(),
                found: format!("{:?}", token.text),
                location: offset_to_location(source, token.offset),
            })
        }
        None => {
            return Err(DialectError::StructuralMismatch {
                production: production.to_string(),
                found: "end of file".to_string(),
                location: offset_to_location(source, source.len()),
            })
        }
    };

    let mut parser = CurlyParser::new();
    while let Some(token) = cursor.next() {
        text.push_str(token.text);
        if parser.parse_token(&token) {
            return Ok(());
        }
    }

    Err(DialectError::UnterminatedBlock {
        production: production.to_string(),
        location: offset_to_location(source, opening),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Parse a lone production and check it spans the whole input.
    fn assert_single_production(function: &str) {
        let productions = parse_productions(function).unwrap();

        assert_eq!(productions.len(), 1);
        assert_eq!(productions[0].name, "foo");
        assert_eq!(productions[0].text, function);
        assert_eq!(productions[0].span, Span::new(0, function.len()));
        assert_eq!(&function[productions[0].span.range()], productions[0].text);
    }

    #[test]
    fn test_empty_blocks_on_separate_lines() {
        assert_single_production("void foo() :\n{\n}\n{\n}");
    }

    #[test]
    fn test_empty_blocks_on_same_line() {
        assert_single_production("void foo() : {} {}");
    }

    #[test]
    fn test_blank_lines_between_blocks() {
        assert_single_production("void foo() :\n\n{\n}\n\n{\n}");
    }

    #[test]
    fn test_string_with_brace() {
        assert_single_production("void foo() :\n{\n    String x = \" } \";\n}\n{\n}");
    }

    #[test]
    fn test_character_with_brace() {
        assert_single_production("void foo() :\n{\n    Character x = ' } ';\n}\n{\n}");
    }

    #[test]
    fn test_comments_with_braces() {
        assert_single_production("void foo() :\n{\n    // }\n}\n{\n    /* } */\n}");
    }

    #[test]
    fn test_two_block_capture() {
        let source = "int foo(int x) :\n{\n  a;\n}\n{\n  b;\n}";
        let productions = parse_productions(source).unwrap();

        assert_eq!(productions[0].name, "foo");
        assert_eq!(productions[0].kind, "int");
        assert_eq!(productions[0].text, source);
    }

    #[test]
    fn test_quoted_close_brace_in_initializer() {
        let source = "int x(int y) :\n{\n\"}\"\n}\n{\n}";
        let productions = parse_productions(source).unwrap();

        assert_eq!(productions.len(), 1);
        assert_eq!(productions[0].name, "x");
        assert!(productions[0].text.contains("{\n\"}\"\n}"));
        assert_eq!(productions[0].text, source);
    }

    #[test]
    fn test_text_outside_productions_is_dropped() {
        let source = "<#-- header -->\nvoid foo() :\n{}\n{}\n\ntrailing text\n";
        let productions = parse_productions(source).unwrap();

        assert_eq!(productions[0].text, "void foo() :\n{}\n{}");
        assert_eq!(productions[0].span.start, 16);
    }

    #[test]
    fn test_multiple_productions() {
        let source = "void a() :\n{\n}\n{\n  A()\n}\n\n\nSqlNode b(Span s) :\n{\n  SqlNode e;\n}\n{\n  e = a() { return e; }\n}\n";
        let productions = parse_productions(source).unwrap();

        assert_eq!(productions.len(), 2);
        assert_eq!(productions[0].text, "void a() :\n{\n}\n{\n  A()\n}");
        assert_eq!(
            productions[1].text,
            "SqlNode b(Span s) :\n{\n  SqlNode e;\n}\n{\n  e = a() { return e; }\n}"
        );
    }

    #[test]
    fn test_signature_glued_to_previous_text() {
        let source = "x;void foo() : {} {}";
        let productions = parse_productions(source).unwrap();

        assert_eq!(productions[0].text, "void foo() : {} {}");
        assert_eq!(productions[0].span.start, 2);
    }

    #[test]
    fn test_signature_inside_captured_block_is_skipped() {
        let source = "void outer() :\n{}\n{\n  // void inner() : {} {}\n}\nvoid next() : {} {}";
        let productions = parse_productions(source).unwrap();

        let names: Vec<&str> = productions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["outer", "next"]);
    }

    #[test]
    fn test_empty_file() {
        assert!(parse_productions("").unwrap().is_empty());
    }

    #[test]
    fn test_file_without_signatures() {
        assert!(parse_productions("<#-- nothing to see -->\n{ }").unwrap().is_empty());
    }

    #[test]
    fn test_missing_body_block_fails() {
        let err = parse_productions("void foo() :\n{\n}").unwrap_err();

        assert!(matches!(
            err,
            DialectError::StructuralMismatch { ref production, ref found, .. }
                if production == "foo" && found == "end of file"
        ));
    }

    #[test]
    fn test_text_instead_of_block_fails() {
        let err = parse_productions("void foo() :\n  bar\n{}").unwrap_err();

        match err {
            DialectError::StructuralMismatch { found, location, .. } => {
                assert_eq!(found, "\"bar\"");
                assert_eq!(location.line, 2);
                assert_eq!(location.column, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_block_fails() {
        let err = parse_productions("void foo() :\n{}\n{\n  { \n}").unwrap_err();

        match err {
            DialectError::UnterminatedBlock { production, location } => {
                assert_eq!(production, "foo");
                assert_eq!(location.line, 3);
                assert_eq!(location.column, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_string_fails() {
        let err = parse_productions("void foo() : { \" } {}").unwrap_err();

        assert!(matches!(err, DialectError::UnterminatedBlock { .. }));
    }
}
