//! Rule tables for the languages highlighted on the site.

pub mod catspeak;
pub mod cosy;
pub mod gml;
pub mod katscript;

use std::collections::HashSet;

use crate::lexer::{BuildError, LexerMeta, RegexLexer, ROOT, State};

/// A fixed set of words sharing one highlighting role.
pub type Vocabulary = HashSet<&'static str>;

pub fn vocabulary(words: &[&'static str]) -> Vocabulary {
    words.iter().copied().collect()
}

/// `^[A-Z0-9_]*$`
pub(crate) fn is_all_caps(chunk: &str) -> bool {
    chunk
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}

/// `^[A-Z][A-Za-z0-9_]*$`
pub(crate) fn is_capitalized(chunk: &str) -> bool {
    let mut bytes = chunk.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_uppercase())
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Lexer used when no language is known: one token for the whole input.
pub fn plain_text() -> Result<RegexLexer, BuildError> {
    RegexLexer::builder(LexerMeta {
        tag: "plaintext",
        aliases: &["text"],
        title: "Plain Text",
        description: "Unhighlighted text",
        filenames: &["*.txt"],
    })
    .state(State::new(ROOT))
    .build()
}
