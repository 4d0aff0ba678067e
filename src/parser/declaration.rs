//! Production signature matching.
//!
//! A signature has the form `<kind> <name>(<kind> <arg>, ...) :`, optionally
//! followed by a newline. Text that does not fit this shape is skipped.

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

use super::span::Span;
use super::types::ProductionSignature;

// Word and space classes are ASCII only
const WORD: &str = r"[0-9A-Za-z_]";
const SPACE: &str = r"[\t\n\x0B\x0C\r ]";

static SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    let (w, s) = (WORD, SPACE);
    let pair = format!(r"{w}+{s}+{w}+");
    Regex::new(&format!(
        r"(?P<kind>{w}+){s}+(?P<name>{w}+){s}*\({s}*(?:{pair}{s}*(?:,{s}*{pair}{s}*)*)?\){s}*:\n?"
    ))
    .expect("signature pattern is valid")
});

/// Lazily yields the signatures of `source` in file order.
pub struct Signatures<'r, 'a> {
    captures: CaptureMatches<'r, 'a>,
}

impl Iterator for Signatures<'_, '_> {
    type Item = ProductionSignature;

    fn next(&mut self) -> Option<ProductionSignature> {
        let caps = self.captures.next()?;
        let whole = caps.get(0)?;

        Some(ProductionSignature {
            name: caps["name"].to_string(),
            kind: caps["kind"].to_string(),
            span: Span::new(whole.start(), whole.end()),
        })
    }
}

/// Find all non-overlapping production signatures in `source`.
pub fn signatures(source: &str) -> Signatures<'static, '_> {
    Signatures {
        captures: SIGNATURE.captures_iter(source),
    }
}

/// Collect every signature in `source`.
pub fn find_signatures(source: &str) -> Vec<ProductionSignature> {
    signatures(source).collect()
}
