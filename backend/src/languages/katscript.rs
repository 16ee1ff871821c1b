//! KatScript.

use once_cell::sync::Lazy;

use crate::languages::{Vocabulary, is_capitalized, vocabulary};
use crate::lexer::{BuildError, LexerMeta, RegexLexer, ROOT, State, TokenCategory};

pub const RESERVED: &[&str] = &["let", "if", "else", "and", "or", "for", "while", "fun", "ret"];

pub const CONSTANTS: &[&str] = &["true", "false", "inf", "NaN", "none"];

static RESERVED_SET: Lazy<Vocabulary> = Lazy::new(|| vocabulary(RESERVED));
static CONSTANT_SET: Lazy<Vocabulary> = Lazy::new(|| vocabulary(CONSTANTS));

pub const META: LexerMeta = LexerMeta {
    tag: "katscript",
    aliases: &["kats"],
    title: "KatScript",
    description: "The KatScript Language",
    filenames: &["*.kats"],
};

pub fn classify(chunk: &str) -> TokenCategory {
    if RESERVED_SET.contains(chunk) {
        TokenCategory::Keyword
    } else if CONSTANT_SET.contains(chunk) {
        TokenCategory::KeywordConstant
    } else if is_capitalized(chunk) {
        TokenCategory::KeywordType
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
                // shadowed by the rule above: `2r10` lexes as `2` then `r10`
                .token(r"\d+r\d+", NumberInteger)
                .token(r#""[^"]*"?"#, String)
                .token(r"[()\[\]{};,.]", Punctuation)
                .token(r"[*/\\!~&+%|^<>=?\-]", Operator)
                .token(r":\s*[A-Za-z0-9_]+", NameBuiltin)
                .token(r":\s*[*/\\!~&+%|^<>=?\-]*", NameBuiltin)
                .classify(r"[A-Za-z_]+[A-Za-z0-9_]*", classify),
        )
        .build()
}
