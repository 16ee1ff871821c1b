use std::fmt;
use std::sync::Arc;

use regex_automata::meta::{BuildError, Regex};
use regex_automata::{Anchored, Input};

use crate::lexer::tokens::TokenCategory;

/// Resolves the category of a matched chunk from its text alone.
pub type Classifier = Arc<dyn Fn(&str) -> TokenCategory + Send + Sync>;

/// What a rule does with the text it matched.
#[derive(Clone)]
pub enum Action {
    Emit(TokenCategory),
    Classify(Classifier),
}

impl Action {
    pub fn resolve(&self, text: &str) -> TokenCategory {
        match self {
            Action::Emit(category) => *category,
            Action::Classify(classify) => classify(text),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Emit(category) => f.debug_tuple("Emit").field(category).finish(),
            Action::Classify(_) => f.write_str("Classify(..)"),
        }
    }
}

/// State change applied after a rule emits its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Push(&'static str),
    Pop,
}

/// A compiled pattern anchored at the scan position, plus its action.
#[derive(Debug, Clone)]
pub struct Rule {
    pub(crate) pattern: Regex,
    pub(crate) source: &'static str,
    pub(crate) action: Action,
    pub(crate) transition: Option<Transition>,
}

impl Rule {
    pub(crate) fn compile(
        source: &'static str,
        action: Action,
        transition: Option<Transition>,
    ) -> Result<Self, BuildError> {
        let pattern = Regex::new(source)?;
        Ok(Self {
            pattern,
            source,
            action,
            transition,
        })
    }

    /// Length in bytes of a match starting exactly at `pos` in `src`.
    ///
    /// The whole source stays visible, so `\b` and friends see the
    /// character before `pos`.
    pub fn match_len(&self, src: &str, pos: usize) -> Option<usize> {
        let input = Input::new(src).span(pos..src.len()).anchored(Anchored::Yes);
        self.pattern.find(input).map(|m| m.end() - pos)
    }

    pub fn pattern(&self) -> &'static str {
        self.source
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }
}
