//! GameMaker Language, and GML-Extended.
//!
//! Identifiers are classified in a fixed order: builtin, reserved keyword,
//! constant, deprecated name, then casing (`ALL_CAPS` macro-like,
//! `Capitalized` type-like, anything else a variable). Builtins, constants
//! and deprecated names come from a [`GmlBuiltins`] listing.
//!
//! GML-Extended differs only in its reserved words, which are the GML ones
//! plus [`EXTENDED_RESERVED`].

use std::sync::Arc;

use crate::builtins::GmlBuiltins;
use crate::languages::{Vocabulary, is_all_caps, is_capitalized, vocabulary};
use crate::lexer::{BuildError, LexerMeta, RegexLexer, ROOT, State, TokenCategory};

pub const RESERVED: &[&str] = &[
    "begin", "end", "if", "then", "else", "while", "do", "for", "break", "continue",
    "with", "until", "repeat", "exit", "and", "or", "xor", "not", "return", "mod",
    "div", "switch", "case", "default", "var", "globalvar", "enum", "function",
    "try", "catch", "finally", "throw", "static", "new", "delete", "constructor",
];

pub const EXTENDED_RESERVED: &[&str] = &[
    "elif", "ignore", "defer", "after", "implies", "bimplies", "seq", "print",
];

pub const META: LexerMeta = LexerMeta {
    tag: "gml",
    aliases: &[],
    title: "Gml",
    description: "The GameMaker Language",
    filenames: &["*.gml"],
};

pub const EXTENDED_META: LexerMeta = LexerMeta {
    tag: "gmlext",
    aliases: &[],
    title: "GmlExt",
    description: "The GameMaker Language with additional reserved words",
    filenames: &[],
};

/// Identifier classification shared by GML and GML-Extended.
#[derive(Debug, Clone)]
pub struct GmlClassifier {
    reserved: Vocabulary,
    names: Arc<GmlBuiltins>,
}

impl GmlClassifier {
    pub fn new(reserved: Vocabulary, names: Arc<GmlBuiltins>) -> Self {
        Self { reserved, names }
    }

    pub fn standard(names: Arc<GmlBuiltins>) -> Self {
        Self::new(vocabulary(RESERVED), names)
    }

    pub fn extended(names: Arc<GmlBuiltins>) -> Self {
        let reserved = vocabulary(RESERVED)
            .union(&vocabulary(EXTENDED_RESERVED))
            .copied()
            .collect();
        Self::new(reserved, names)
    }

    pub fn classify(&self, chunk: &str) -> TokenCategory {
        if self.names.builtins.contains(chunk) {
            TokenCategory::NameBuiltin
        } else if self.reserved.contains(chunk) {
            TokenCategory::Keyword
        } else if self.names.constants.contains(chunk) {
            TokenCategory::KeywordConstant
        } else if self.names.deprecated.contains(chunk) {
            TokenCategory::GenericDeleted
        } else if is_all_caps(chunk) {
            TokenCategory::NameVariableMagic
        } else if is_capitalized(chunk) {
            TokenCategory::KeywordType
        } else {
            TokenCategory::NameVariable
        }
    }
}

pub fn lexer(names: Arc<GmlBuiltins>) -> Result<RegexLexer, BuildError> {
    build(META, GmlClassifier::standard(names))
}

pub fn extended_lexer(names: Arc<GmlBuiltins>) -> Result<RegexLexer, BuildError> {
    build(EXTENDED_META, GmlClassifier::extended(names))
}

fn build(meta: LexerMeta, classifier: GmlClassifier) -> Result<RegexLexer, BuildError> {
    use TokenCategory::*;

    RegexLexer::builder(meta)
        .state(
            State::new(ROOT)
                .token(r"\s+", Whitespace)
                .token(r"//[^\n]*", CommentLine)
                .token(r"/\*[^*]*?\*/", CommentBlock)
                .token(r"\d+\.\d+", NumberFloat)
                .token(r"\.\d+", NumberFloat)
                .token(r"\d+\.", NumberFloat)
                .token(r"\d+", NumberInteger)
                .token(r#""[^"\n]*"?"#, String)
                .token(r"@'[^']*'", String)
                .token(r"#[A-Za-z]+", CommentPreproc)
                .token(r"[()\[\]{};,]", Punctuation)
                .token(r"[*/!#@~&+%\\|^<>=?\-:.]", Operator)
                .classify(r"[A-Za-z0-9_]+", move |chunk| classifier.classify(chunk)),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use TokenCategory::*;

    #[fixture]
    fn names() -> Arc<GmlBuiltins> {
        Arc::new(GmlBuiltins::parse("show_debug_message\npi#\nundefined&\nstring\n"))
    }

    fn single(lexer: &RegexLexer, src: &str) -> TokenCategory {
        let tokens = lexer.lex(src).unwrap();
        assert_eq!(tokens.len(), 1, "{src:?} lexed as {tokens:?}");
        tokens[0].category
    }

    #[rstest]
    #[case("pi", KeywordConstant)]
    #[case("undefined", GenericDeleted)]
    #[case("show_debug_message", NameBuiltin)]
    #[case("ANY_OTHER_CAPS", NameVariableMagic)]
    #[case("MyStruct", KeywordType)]
    #[case("foo", NameVariable)]
    #[case("globalvar", Keyword)]
    #[case("elif", NameVariable)]
    #[case("1.5", NumberFloat)]
    #[case(".5", NumberFloat)]
    #[case("5.", NumberFloat)]
    #[case("15", NumberInteger)]
    #[case("\"unterminated", String)]
    #[case("@'verbatim\nstring'", String)]
    #[case("#macro", CommentPreproc)]
    #[case("#region", CommentPreproc)]
    #[case("// line", CommentLine)]
    #[case("/* block */", CommentBlock)]
    fn gml_single_token(names: Arc<GmlBuiltins>, #[case] src: &str, #[case] expected: TokenCategory) {
        let lexer = lexer(names).unwrap();
        assert_eq!(single(&lexer, src), expected);
    }

    #[rstest]
    #[case("elif", Keyword)]
    #[case("defer", Keyword)]
    #[case("print", Keyword)]
    #[case("while", Keyword)]
    #[case("pi", KeywordConstant)]
    fn extended_reserved_words(names: Arc<GmlBuiltins>, #[case] src: &str, #[case] expected: TokenCategory) {
        let lexer = extended_lexer(names).unwrap();
        assert_eq!(single(&lexer, src), expected);
    }

    #[rstest]
    fn builtins_take_precedence_over_keywords(names: Arc<GmlBuiltins>) {
        let mut listing = (*names).clone();
        listing.builtins.insert("repeat".into());
        let classifier = GmlClassifier::standard(Arc::new(listing));
        assert_eq!(classifier.classify("repeat"), NameBuiltin);
        assert_eq!(classifier.classify("string"), NameBuiltin);
    }

    #[test]
    fn empty_listing_falls_back_to_keywords_and_casing() {
        let lexer = lexer(Arc::default()).unwrap();
        assert_eq!(single(&lexer, "pi"), NameVariable);
        assert_eq!(single(&lexer, "show_debug_message"), NameVariable);
        assert_eq!(single(&lexer, "return"), Keyword);
        assert_eq!(single(&lexer, "MAX"), NameVariableMagic);
    }

    #[rstest]
    fn classification_is_stable(names: Arc<GmlBuiltins>) {
        let classifier = GmlClassifier::extended(names);
        for word in ["pi", "elif", "Foo", "FOO", "foo", "undefined"] {
            assert_eq!(classifier.classify(word), classifier.classify(word));
        }
    }

    #[rstest]
    fn unexpected_characters_become_plain_text(names: Arc<GmlBuiltins>) {
        let lexer = lexer(names).unwrap();
        let tokens = lexer.lex("x = $FF;").unwrap();
        let got: Vec<_> = tokens.iter().map(|t| (t.category, t.text)).collect();
        assert_eq!(
            got,
            vec![
                (NameVariable, "x"),
                (Whitespace, " "),
                (Operator, "="),
                (Whitespace, " "),
                (PlainText, "$"),
                (NameVariableMagic, "FF"),
                (Punctuation, ";"),
            ]
        );
    }

    #[rstest]
    fn statement(names: Arc<GmlBuiltins>) {
        let lexer = lexer(names).unwrap();
        let tokens = lexer.lex("if (hp <= 0) show_debug_message(\"dead\");").unwrap();
        let got: Vec<_> = tokens
            .iter()
            .filter(|t| t.category != Whitespace)
            .map(|t| (t.category, t.text))
            .collect();
        assert_eq!(
            got,
            vec![
                (Keyword, "if"),
                (Punctuation, "("),
                (NameVariable, "hp"),
                (Operator, "<"),
                (Operator, "="),
                (NumberInteger, "0"),
                (Punctuation, ")"),
                (NameBuiltin, "show_debug_message"),
                (Punctuation, "("),
                (String, "\"dead\""),
                (Punctuation, ")"),
                (Punctuation, ";"),
            ]
        );
    }
}
