//! Catspeak.

use once_cell::sync::Lazy;

use crate::languages::{Vocabulary, vocabulary};
use crate::lexer::{BuildError, LexerMeta, RegexLexer, ROOT, State, TokenCategory};

pub const RESERVED: &[&str] = &["if", "else", "while", "break", "continue", "return", "print", "run"];

pub const CONSTANTS: &[&str] = &["true", "false", "infinity", "NaN", "undefined"];

/// Functions provided by the Catspeak prelude.
pub const BUILTINS: &[&str] = &["bool", "string", "real", "typeof", "instanceof", "len", "keys"];

static RESERVED_SET: Lazy<Vocabulary> = Lazy::new(|| vocabulary(RESERVED));
static CONSTANT_SET: Lazy<Vocabulary> = Lazy::new(|| vocabulary(CONSTANTS));
static BUILTIN_SET: Lazy<Vocabulary> = Lazy::new(|| vocabulary(BUILTINS));

pub const META: LexerMeta = LexerMeta {
    tag: "catspeak",
    aliases: &["cats"],
    title: "Catspeak",
    description: "The Catspeak Language",
    filenames: &["*.cats"],
};

pub fn classify(chunk: &str) -> TokenCategory {
    if RESERVED_SET.contains(chunk) {
        TokenCategory::Keyword
    } else if CONSTANT_SET.contains(chunk) {
        TokenCategory::KeywordConstant
    } else if BUILTIN_SET.contains(chunk) {
        TokenCategory::NameBuiltin
    } else {
        TokenCategory::NameVariable
    }
}

pub fn lexer() -> Result<RegexLexer, BuildError> {
    use TokenCategory::*;

    RegexLexer::builder(META)
        .state(
            State::new(ROOT)
                .token(r"\s+", Whitespace)
                .token(r"--[^\n]*", CommentLine)
                .token(r"\d+\.\d+", NumberFloat)
                .token(r"\d+", NumberInteger)
                .token(r#""[^"]*"?"#, String)
                .token(r"[()\[\]{};:,.]", Punctuation)
                .token(r"[*/!#@~&+%|^<>=?\-]", Operator)
                .token(r"`[^`]*`", NameVariableMagic)
                .classify(r"[A-Za-z_']+[A-Za-z0-9_']*", classify),
        )
        .build()
}
