//! Syntax highlighting for the code samples on the site.
//!
//! Each supported language is a [`RegexLexer`](lexer::RegexLexer): a `root`
//! state holding an ordered list of anchored regex rules. The first rule
//! that matches at the scan position wins and emits a token, either with a
//! fixed [`TokenCategory`](lexer::TokenCategory) or with one picked by a
//! classifier from the matched text. The [`Registry`](registry::Registry)
//! maps language tags to lexers and falls back to plain text.

pub mod builtins;
pub mod languages;
pub mod lexer;
pub mod registry;
pub mod render;
pub mod utils;
