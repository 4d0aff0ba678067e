//! Tokenizer for fragment text.
//!
//! Splits text into the delimiters that matter for brace tracking (whitespace,
//! quotes, comment markers, braces) and runs of everything else. The split is
//! lossless: concatenating the tokens in order gives back the input.

use std::iter::Peekable;

use logos::{Logos, SpannedIter};

use super::types::Token;

/// Classification of a token by its literal value.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token(" ")]
    Space,

    #[token("\n")]
    Newline,

    // Any other single whitespace character
    #[regex(r"[\t\r\x0B\x0C]")]
    Whitespace,

    #[token("\"")]
    DoubleQuote,

    #[token("'")]
    SingleQuote,

    #[token("//")]
    LineComment,

    #[token("/*")]
    BlockCommentStart,

    #[token("*/")]
    BlockCommentEnd,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    // A lone `/` or `*` is ordinary text; runs are merged by `Tokens`.
    #[regex(r#"[^ \t\r\n\x0B\x0C"'{}/*]+"#)]
    #[token("/")]
    #[token("*")]
    Text,
}

impl TokenKind {
    pub fn is_whitespace(self) -> bool {
        matches!(
            self,
            TokenKind::Space | TokenKind::Newline | TokenKind::Whitespace
        )
    }
}

/// Lazy token stream over fragment text.
///
/// Adjacent text pieces are merged so that every run of non-delimiter
/// characters comes out as a single token.
pub struct Tokens<'a> {
    source: &'a str,
    lexer: Peekable<SpannedIter<'a, TokenKind>>,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: TokenKind::lexer(source).spanned().peekable(),
        }
    }
}

/// Tokenize `source`. Calling this again on the same text yields the same
/// sequence.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}

fn is_text(result: &Result<TokenKind, ()>) -> bool {
    // Anything the lexer cannot classify is kept as text
    !matches!(result, Ok(kind) if *kind != TokenKind::Text)
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let (result, span) = self.lexer.next()?;

        if !is_text(&result) {
            let kind = result.unwrap_or(TokenKind::Text);
            return Some(Token::new(kind, &self.source[span.clone()], span.start));
        }

        let start = span.start;
        let mut end = span.end;
        while let Some((_, next)) = self.lexer.next_if(|(result, _)| is_text(result)) {
            end = next.end;
        }

        Some(Token::new(TokenKind::Text, &self.source[start..end], start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        tokenize(source).map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_tokenize_signature() {
        assert_eq!(
            texts("void foo() :\n{"),
            vec!["void", " ", "foo()", " ", ":", "\n", "{"]
        );
    }

    #[test]
    fn test_tokenize_delimiters() {
        assert_eq!(
            texts("a\"b'c{d}e"),
            vec!["a", "\"", "b", "'", "c", "{", "d", "}", "e"]
        );
    }

    #[test]
    fn test_tokenize_comments() {
        assert_eq!(texts("x// y"), vec!["x", "//", " ", "y"]);
        assert_eq!(texts("/* { */"), vec!["/*", " ", "{", " ", "*/"]);
    }

    #[test]
    fn test_lone_slash_and_star_are_text() {
        assert_eq!(texts("a/b*c d"), vec!["a/b*c", " ", "d"]);
        assert_eq!(texts("x = 2 * 3"), vec!["x", " ", "=", " ", "2", " ", "*", " ", "3"]);
    }

    #[test]
    fn test_longest_delimiter_wins() {
        assert_eq!(texts("a/*b"), vec!["a", "/*", "b"]);
        assert_eq!(texts("b*/c"), vec!["b", "*/", "c"]);
    }

    #[test]
    fn test_each_whitespace_char_is_a_token() {
        let tokens: Vec<_> = tokenize("\t\r\n  x").collect();

        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2].kind, TokenKind::Newline);
        assert_eq!(tokens[3].kind, TokenKind::Space);
        assert_eq!(tokens[4].kind, TokenKind::Space);
        assert_eq!(tokens[5].kind, TokenKind::Text);
    }

    #[test]
    fn test_token_offsets() {
        let tokens: Vec<_> = tokenize("ab {\n}").collect();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();

        assert_eq!(offsets, vec![0, 2, 3, 4, 5]);
        assert_eq!(tokens[0].end(), 2);
    }

    #[test]
    fn test_tokenize_is_lossless() {
        let sources = [
            "",
            "int x(int y) :\n{\n\"}\"\n}\n{\n}",
            "SqlNode Foo() :\n{ /* { */ String s = \"//\"; }\n{ 'a' // }\n }",
            "é ü {ß} \t\r\n**//**",
            "a/b/*c*/d",
        ];

        for source in sources {
            let rebuilt: String = tokenize(source).map(|t| t.text).collect();
            assert_eq!(rebuilt, source);
        }
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let source = "void foo() : { } { }";
        let first: Vec<_> = tokenize(source).collect();
        let second: Vec<_> = tokenize(source).collect();

        assert_eq!(first, second);
    }
}
