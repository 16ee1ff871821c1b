//! Cosy.
//!
//! Cosy has no classifier: reserved words and primitive types are plain
//! alternations, and the case of an identifier's first letter decides
//! between a type name (`Vec`) and a value name (`vec`). A name followed by
//! `!` is a builtin call.

use crate::lexer::{BuildError, LexerMeta, RegexLexer, ROOT, State, TokenCategory::*};

pub const META: LexerMeta = LexerMeta {
    tag: "cosy",
    aliases: &[],
    title: "Cosy",
    description: "The Cosy programming language",
    filenames: &["*.cosy"],
};

pub fn lexer() -> Result<RegexLexer, BuildError> {
    RegexLexer::builder(META)
        .state(
            State::new(ROOT)
                .token(r"\s+", Whitespace)
                .token(r"--[^\n]*", CommentLine)
                .token(r"(?:def|let|struct|fn|for|in|if|else)\b|_", Keyword)
                .token(r"\b[iu](?:8|16|32|64|128|size)\b", KeywordType)
                .token(r"\bf(?:32|64|128)\b", KeywordType)
                .token(r"(?:self|type|bool|char|string|void|nothing)\b", KeywordType)
                .token(r"[()\[\]{}#;,]", Punctuation)
                .token(r"[*/!@~&+%|^<>=?\-:.]", Operator)
                .token(r"(?:\p{L}|\p{N})*\s*!", NameBuiltin)
                .token(r"\p{Lu}(?:\p{L}|\p{N})*", KeywordType)
                .token(r"\p{Ll}(?:\p{L}|\p{N})*", Name)
                .token(r"\d+\.\d+", NumberFloat)
                .token(r"\d+", NumberInteger)
                .token(r#""[^"]*""#, String)
                .token(r"'(?:.|\\.)'", StringChar)
                .token(r"`[^`]*`", StringOther),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenCategory;
    use rstest::rstest;

    fn single(src: &str) -> TokenCategory {
        let lexer = lexer().unwrap();
        let tokens = lexer.lex(src).unwrap();
        assert_eq!(tokens.len(), 1, "{src:?} lexed as {tokens:?}");
        tokens[0].category
    }

    #[rstest]
    #[case("Foo", KeywordType)]
    #[case("foo", Name)]
    #[case("print!", NameBuiltin)]
    #[case("Vec!", NameBuiltin)]
    #[case("let", Keyword)]
    #[case("_", Keyword)]
    #[case("letter", Name)]
    #[case("define", Name)]
    #[case("i32", KeywordType)]
    #[case("usize", KeywordType)]
    #[case("f64", KeywordType)]
    #[case("i33", Name)]
    #[case("self", KeywordType)]
    #[case("selfish", Name)]
    #[case("1.25", NumberFloat)]
    #[case("125", NumberInteger)]
    #[case("\"text\"", String)]
    #[case("'a'", StringChar)]
    #[case(r"'\n'", StringChar)]
    #[case("`raw`", StringOther)]
    #[case("-- note", CommentLine)]
    #[case("ünïcode", Name)]
    fn single_token(#[case] src: &str, #[case] expected: TokenCategory) {
        assert_eq!(single(src), expected);
    }

    #[rstest]
    #[case("my_var", &[(Name, "my"), (Keyword, "_"), (Name, "var")])]
    #[case("_x", &[(Keyword, "_"), (Name, "x")])]
    #[case("x_i8", &[(Name, "x"), (Keyword, "_"), (Name, "i8")])]
    #[case("n u8", &[(Name, "n"), (Whitespace, " "), (KeywordType, "u8")])]
    fn underscores_and_type_suffixes(#[case] src: &str, #[case] expected: &[(TokenCategory, &str)]) {
        let tokens = lexer().unwrap().lex(src).unwrap();
        let got: Vec<_> = tokens.iter().map(|t| (t.category, t.text)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn declaration() {
        let lexer = lexer().unwrap();
        let tokens = lexer.lex("let x: i32 = max!(a, 2);").unwrap();
        let got: Vec<_> = tokens
            .iter()
            .filter(|t| t.category != Whitespace)
            .map(|t| (t.category, t.text))
            .collect();
        assert_eq!(
            got,
            vec![
                (Keyword, "let"),
                (Name, "x"),
                (Operator, ":"),
                (KeywordType, "i32"),
                (Operator, "="),
                (NameBuiltin, "max!"),
                (Punctuation, "("),
                (Name, "a"),
                (Punctuation, ","),
                (NumberInteger, "2"),
                (Punctuation, ")"),
                (Punctuation, ";"),
            ]
        );
    }
}
