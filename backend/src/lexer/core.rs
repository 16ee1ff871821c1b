use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::lexer::{
    error::{BuildError, LexError},
    rule::{Action, Rule, Transition},
    tokens::{Token, TokenCategory},
};

/// Name of the state every lexer starts scanning in.
pub const ROOT: &str = "root";

/// Ordered rule list of one lexer state, before compilation.
///
/// Rules are tried in the order they were added; the first one that matches
/// at the scan position wins.
#[derive(Debug, Clone)]
pub struct State {
    name: &'static str,
    rules: Vec<RuleDef>,
}

#[derive(Debug, Clone)]
struct RuleDef {
    pattern: &'static str,
    action: Action,
    transition: Option<Transition>,
}

impl State {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    /// Emits a fixed category for every match of `pattern`.
    #[must_use]
    pub fn token(self, pattern: &'static str, category: TokenCategory) -> Self {
        self.rule(pattern, Action::Emit(category), None)
    }

    /// Hands every match of `pattern` to `classify` to pick its category.
    #[must_use]
    pub fn classify(
        self,
        pattern: &'static str,
        classify: impl Fn(&str) -> TokenCategory + Send + Sync + 'static,
    ) -> Self {
        self.rule(pattern, Action::Classify(Arc::new(classify)), None)
    }

    /// Emits `category`, then enters state `next`.
    #[must_use]
    pub fn push(self, pattern: &'static str, category: TokenCategory, next: &'static str) -> Self {
        self.rule(pattern, Action::Emit(category), Some(Transition::Push(next)))
    }

    /// Emits `category`, then returns to the state below this one.
    #[must_use]
    pub fn pop(self, pattern: &'static str, category: TokenCategory) -> Self {
        self.rule(pattern, Action::Emit(category), Some(Transition::Pop))
    }

    #[must_use]
    pub fn rule(
        mut self,
        pattern: &'static str,
        action: Action,
        transition: Option<Transition>,
    ) -> Self {
        self.rules.push(RuleDef {
            pattern,
            action,
            transition,
        });
        self
    }
}

/// Descriptive data attached to a lexer. Not consulted while scanning.
#[derive(Debug, Clone, Default)]
pub struct LexerMeta {
    pub tag: &'static str,
    pub aliases: &'static [&'static str],
    pub title: &'static str,
    pub description: &'static str,
    pub filenames: &'static [&'static str],
}

#[derive(Debug, Clone)]
struct CompiledState {
    name: &'static str,
    rules: Vec<Rule>,
}

/// A regex-driven lexer: named states holding ordered, anchored rules.
#[derive(Debug, Clone)]
pub struct RegexLexer {
    meta: LexerMeta,
    states: Vec<CompiledState>,
    root: usize,
}

impl RegexLexer {
    pub fn builder(meta: LexerMeta) -> LexerBuilder {
        LexerBuilder {
            meta,
            states: Vec::new(),
        }
    }

    pub fn meta(&self) -> &LexerMeta {
        &self.meta
    }

    pub fn tag(&self) -> &'static str {
        self.meta.tag
    }

    /// Whether `name` is this lexer's tag or one of its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.meta.tag == name || self.meta.aliases.contains(&name)
    }

    /// Whether one of the lexer's `*.ext` globs matches `filename`.
    pub fn matches_filename(&self, filename: &str) -> bool {
        self.meta.filenames.iter().any(|glob| match glob.strip_prefix('*') {
            Some(suffix) => filename.ends_with(suffix),
            None => filename == *glob,
        })
    }

    /// Splits `src` into classified tokens covering every byte of it.
    ///
    /// At each position the active state's rules are tried in order and the
    /// first match wins. Characters no rule accepts are gathered into a single
    /// [`TokenCategory::PlainText`] token. A rule matching the empty string
    /// aborts with [`LexError`].
    pub fn lex<'src>(&self, src: &'src str) -> Result<Vec<Token<'src>>, LexError> {
        let mut tokens = Vec::new();
        let mut stack = vec![self.root];
        let mut pos = 0;
        let mut unmatched: Option<usize> = None;

        while pos < src.len() {
            let state = &self.states[*stack.last().unwrap_or(&self.root)];

            let hit = state
                .rules
                .iter()
                .enumerate()
                .find_map(|(index, rule)| rule.match_len(src, pos).map(|len| (index, rule, len)));

            let Some((index, rule, len)) = hit else {
                unmatched.get_or_insert(pos);
                pos += src[pos..].chars().next().map_or(1, char::len_utf8);
                continue;
            };

            if len == 0 {
                return Err(LexError::empty_match(
                    self.meta.tag,
                    src,
                    pos,
                    state.name,
                    index,
                    rule.pattern(),
                ));
            }

            if let Some(start) = unmatched.take() {
                trace!(lexer = self.meta.tag, start, end = pos, "no rule matched");
                tokens.push(Token::spanning(TokenCategory::PlainText, src, start, pos));
            }

            let end = pos + len;
            let category = rule.action().resolve(&src[pos..end]);
            tokens.push(Token::spanning(category, src, pos, end));
            pos = end;

            match rule.transition() {
                Some(Transition::Push(next)) => {
                    if let Some(target) = self.state_index(next) {
                        stack.push(target);
                    }
                }
                Some(Transition::Pop) => {
                    if stack.len() > 1 {
                        stack.pop();
                    }
                }
                None => {}
            }
        }

        if let Some(start) = unmatched {
            trace!(lexer = self.meta.tag, start, end = pos, "no rule matched");
            tokens.push(Token::spanning(TokenCategory::PlainText, src, start, pos));
        }

        debug!(
            lexer = self.meta.tag,
            bytes = src.len(),
            tokens = tokens.len(),
            "lexed source"
        );
        Ok(tokens)
    }

    fn state_index(&self, name: &str) -> Option<usize> {
        self.states.iter().position(|state| state.name == name)
    }
}

pub struct LexerBuilder {
    meta: LexerMeta,
    states: Vec<State>,
}

impl LexerBuilder {
    #[must_use]
    pub fn state(mut self, state: State) -> Self {
        self.states.push(state);
        self
    }

    /// Compiles every rule and checks the state graph.
    pub fn build(self) -> Result<RegexLexer, BuildError> {
        let lexer = self.meta.tag;
        let mut seen: HashMap<&'static str, usize> = HashMap::new();
        for (index, state) in self.states.iter().enumerate() {
            if seen.insert(state.name, index).is_some() {
                return Err(BuildError::DuplicateState {
                    lexer: lexer.into(),
                    state: state.name.into(),
                });
            }
        }

        let root = *seen.get(ROOT).ok_or_else(|| BuildError::MissingRoot {
            lexer: lexer.into(),
        })?;

        let mut states = Vec::with_capacity(self.states.len());
        for state in self.states {
            let mut rules = Vec::with_capacity(state.rules.len());
            for (index, def) in state.rules.into_iter().enumerate() {
                if let Some(Transition::Push(target)) = &def.transition {
                    if !seen.contains_key(target) {
                        return Err(BuildError::UnknownState {
                            lexer: lexer.into(),
                            state: state.name.into(),
                            target: (*target).into(),
                        });
                    }
                }
                let rule = Rule::compile(def.pattern, def.action, def.transition).map_err(
                    |source| BuildError::InvalidPattern {
                        lexer: lexer.into(),
                        state: state.name.into(),
                        rule: index,
                        source,
                    },
                )?;
                rules.push(rule);
            }
            states.push(CompiledState {
                name: state.name,
                rules,
            });
        }

        debug!(lexer, states = states.len(), "built lexer");
        Ok(RegexLexer {
            meta: self.meta,
            states,
            root,
        })
    }
}
