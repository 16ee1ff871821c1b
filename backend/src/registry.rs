//! Language selection.
//!
//! A [`Registry`] is built once at startup, after the GML builtins listing
//! has been read, and is immutable afterwards. It can be shared freely
//! between threads.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::builtins::GmlBuiltins;
use crate::languages::{self, catspeak, cosy, gml, katscript};
use crate::lexer::{BuildError, LexError, RegexLexer, Token};

/// Default location of the GML builtins listing, relative to the working directory.
pub const DEFAULT_GML_BUILTINS: &str = "data/gml_builtins.txt";

#[derive(Debug, Clone)]
pub struct Registry {
    lexers: Vec<RegexLexer>,
    plain: RegexLexer,
}

impl Registry {
    /// Registers every built-in language, with GML classified against `names`.
    pub fn new(names: GmlBuiltins) -> Result<Self, BuildError> {
        let names = Arc::new(names);
        let lexers = vec![
            cosy::lexer()?,
            gml::lexer(Arc::clone(&names))?,
            gml::extended_lexer(names)?,
            catspeak::lexer()?,
            katscript::lexer()?,
        ];
        for lexer in &lexers {
            debug!(
                tag = lexer.tag(),
                aliases = ?lexer.meta().aliases,
                "registered lexer"
            );
        }

        Ok(Self {
            lexers,
            plain: languages::plain_text()?,
        })
    }

    /// Reads the GML builtins listing at `path`, then registers every language.
    ///
    /// An unreadable listing is logged and leaves GML with empty builtin sets.
    pub fn load(gml_builtins: impl AsRef<Path>) -> Result<Self, BuildError> {
        Self::new(GmlBuiltins::load_or_empty(gml_builtins))
    }

    /// The lexer registered under `tag` or one of its aliases.
    pub fn find(&self, tag: &str) -> Option<&RegexLexer> {
        self.lexers.iter().find(|lexer| lexer.answers_to(tag))
    }

    /// Like [`Registry::find`], falling back to the plain-text lexer.
    pub fn find_or_plain(&self, tag: &str) -> &RegexLexer {
        self.find(tag).unwrap_or_else(|| {
            debug!(tag, "no lexer registered; using plain text");
            &self.plain
        })
    }

    /// The first lexer whose filename globs match `path`'s file name.
    pub fn guess_by_filename(&self, path: impl AsRef<Path>) -> Option<&RegexLexer> {
        let name = path.as_ref().file_name()?.to_str()?;
        self.lexers.iter().find(|lexer| lexer.matches_filename(name))
    }

    pub fn plain_text(&self) -> &RegexLexer {
        &self.plain
    }

    pub fn lexers(&self) -> impl Iterator<Item = &RegexLexer> {
        self.lexers.iter()
    }

    /// Tokenizes `src` as the language named `tag`.
    pub fn lex<'src>(&self, tag: &str, src: &'src str) -> Result<Vec<Token<'src>>, LexError> {
        self.find_or_plain(tag).lex(src)
    }
}
