//! GML builtin names.
//!
//! The listing is plain text with one identifier per line. A `#` after the
//! name marks a constant, a `&` marks a deprecated name, anything else is an
//! ordinary builtin function or variable:
//!
//! ```text
//! show_debug_message(val,...)
//! pi#
//! gamemaker_registered&
//! ```

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

/// Leading identifier, then whatever follows it on the line.
static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([A-Za-z0-9_]+)(.*)$").expect("static entry pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    Constant,
    Deprecated,
    Builtin,
}

impl BuiltinKind {
    fn from_suffix(suffix: &str) -> Self {
        if suffix.contains('#') {
            BuiltinKind::Constant
        } else if suffix.contains('&') {
            BuiltinKind::Deprecated
        } else {
            BuiltinKind::Builtin
        }
    }
}

/// Three disjoint vocabularies read from a builtins listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GmlBuiltins {
    pub constants: HashSet<String>,
    pub deprecated: HashSet<String>,
    pub builtins: HashSet<String>,
}

impl GmlBuiltins {
    pub fn parse(listing: &str) -> Self {
        let mut names = Self::default();
        for caps in ENTRY.captures_iter(listing) {
            let ident = &caps[1];
            if names.kind_of(ident).is_some() {
                debug!(ident, "ignoring repeated builtin listing");
                continue;
            }
            let set = match BuiltinKind::from_suffix(&caps[2]) {
                BuiltinKind::Constant => &mut names.constants,
                BuiltinKind::Deprecated => &mut names.deprecated,
                BuiltinKind::Builtin => &mut names.builtins,
            };
            set.insert(ident.to_owned());
        }
        names
    }

    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let listing = fs::read_to_string(path)?;
        let names = Self::parse(&listing);
        info!(
            path = %path.display(),
            builtins = names.builtins.len(),
            constants = names.constants.len(),
            deprecated = names.deprecated.len(),
            "loaded GML builtins"
        );
        Ok(names)
    }

    /// Like [`GmlBuiltins::load`], but an unreadable file leaves every set empty.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|err| {
            warn!(
                path = %path.display(),
                error = %err,
                "cannot read GML builtins; highlighting falls back to keywords and casing"
            );
            Self::default()
        })
    }

    pub fn kind_of(&self, ident: &str) -> Option<BuiltinKind> {
        if self.constants.contains(ident) {
            Some(BuiltinKind::Constant)
        } else if self.deprecated.contains(ident) {
            Some(BuiltinKind::Deprecated)
        } else if self.builtins.contains(ident) {
            Some(BuiltinKind::Builtin)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty() && self.deprecated.is_empty() && self.builtins.is_empty()
    }
}
