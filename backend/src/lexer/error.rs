use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A rule table that would stall the scan loop.
///
/// Raised when the first matching rule at some position matches the empty
/// string. This is a defect in the language definition, not in the input.
#[derive(Error, Debug, Diagnostic)]
#[error("rule {rule} (`{pattern}`) in state `{state}` of lexer `{lexer}` matched the empty string")]
#[diagnostic(
    code(sitelex::lexer::empty_match),
    help("Every rule must consume at least one character; fix the rule table")
)]
pub struct LexError {
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("scan stalled here")]
    pub span: SourceSpan,
    pub lexer: String,
    pub state: String,
    pub rule: usize,
    pub pattern: String,
}

impl LexError {
    pub fn empty_match(
        lexer: &str,
        full_src: &str,
        offset: usize,
        state: &str,
        rule: usize,
        pattern: &str,
    ) -> Self {
        Self {
            source_code: NamedSource::new(lexer, full_src.to_owned()),
            span: SourceSpan::from((offset, 0)),
            lexer: lexer.into(),
            state: state.into(),
            rule,
            pattern: pattern.into(),
        }
    }
}

/// What can go wrong while assembling a lexer from its rule table.
#[derive(Error, Debug, Diagnostic)]
pub enum BuildError {
    #[error("rule {rule} in state `{state}` of lexer `{lexer}` is not a valid pattern")]
    #[diagnostic(code(sitelex::lexer::invalid_pattern))]
    InvalidPattern {
        lexer: String,
        state: String,
        rule: usize,
        #[source]
        source: regex_automata::meta::BuildError,
    },

    #[error("lexer `{lexer}` transitions from state `{state}` to undeclared state `{target}`")]
    #[diagnostic(code(sitelex::lexer::unknown_state))]
    UnknownState {
        lexer: String,
        state: String,
        target: String,
    },

    #[error("lexer `{lexer}` has no `root` state")]
    #[diagnostic(
        code(sitelex::lexer::missing_root),
        help("Declare the entry state with `State::new(\"root\")`")
    )]
    MissingRoot { lexer: String },

    #[error("lexer `{lexer}` declares state `{state}` more than once")]
    #[diagnostic(code(sitelex::lexer::duplicate_state))]
    DuplicateState { lexer: String, state: String },
}
