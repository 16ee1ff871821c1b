//! Property tests for the token stream invariants every lexer must uphold.
//!
//! For any input: tokens are non-empty, contiguous, start at 0, end at the
//! input length, and their texts concatenate back to the input.

use proptest::prelude::*;
use sitelex::builtins::GmlBuiltins;
use sitelex::lexer::Token;
use sitelex::registry::Registry;

const TAGS: &[&str] = &["cosy", "gml", "gmlext", "cats", "kats", "nonexistent-lang"];

fn registry() -> Registry {
    Registry::new(GmlBuiltins::parse("show_debug_message\npi#\nundefined&\n")).unwrap()
}

fn check_partition(src: &str, tokens: &[Token]) -> Result<(), TestCaseError> {
    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    prop_assert_eq!(rebuilt.as_str(), src);
    prop_assert_eq!(tokens.is_empty(), src.is_empty());

    let mut expected_start = 0;
    for token in tokens {
        prop_assert!(!token.is_empty(), "empty token {:?}", token);
        prop_assert_eq!(token.start, expected_start);
        prop_assert_eq!(&src[token.span()], token.text);
        expected_start = token.end;
    }
    prop_assert_eq!(expected_start, src.len());
    Ok(())
}

/// Source-like text: fragments from every language glued together.
fn code_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[A-Za-z_][A-Za-z0-9_]{0,8}",
            "[0-9]{1,4}(\\.[0-9]{0,3})?",
            "[ \t\n]{1,3}",
            "--[^\n]{0,10}",
            "//[^\n]{0,10}",
            "/\\*[a-z ]{0,6}\\*/",
            "\"[^\"]{0,6}\"?",
            "`[a-z]{0,5}`",
            ":[ ]?[a-z+]{0,4}",
            "#[a-z]{1,6}",
            "[(){}\\[\\];,.:!?<>=+*/%&|^~@$'\\\\-]",
            "[a-z]{1,5}!",
            "\\PC{1,3}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn arbitrary_text_is_partitioned(src in any::<String>()) {
        let registry = registry();
        for tag in TAGS {
            let tokens = registry.lex(tag, &src).unwrap();
            check_partition(&src, &tokens)?;
        }
    }

    #[test]
    fn code_like_text_is_partitioned(src in code_strategy()) {
        let registry = registry();
        for tag in TAGS {
            let tokens = registry.lex(tag, &src).unwrap();
            check_partition(&src, &tokens)?;
        }
    }

    #[test]
    fn lexing_is_deterministic(src in code_strategy()) {
        let registry = registry();
        for tag in TAGS {
            let first = registry.lex(tag, &src).unwrap();
            let second = registry.lex(tag, &src).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
