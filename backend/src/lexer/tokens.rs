//! All lexical categories recognised by the highlighting lexers.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// A classified slice of the input.
///
/// Tokens produced by one call to [`RegexLexer::lex`](crate::lexer::core::RegexLexer::lex)
/// partition the source: `start` of each token equals `end` of the previous
/// one, and concatenating every `text` gives back the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub category: TokenCategory,
    pub text: &'src str,
    pub start: usize, // byte offset, inclusive
    pub end: usize,   // byte offset, exclusive
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    Whitespace,        // Text.Whitespace
    CommentLine,       // Comment.Single
    CommentBlock,      // Comment.Multiline
    CommentPreproc,    // Comment.Preproc
    NumberInteger,     // Literal.Number.Integer
    NumberFloat,       // Literal.Number.Float
    String,            // Literal.String
    StringChar,        // Literal.String.Char
    StringOther,       // Literal.String.Other
    Punctuation,       // Punctuation
    Operator,          // Operator
    Name,              // Name
    NameVariable,      // Name.Variable
    NameVariableMagic, // Name.Variable.Magic
    NameBuiltin,       // Name.Builtin
    Keyword,           // Keyword
    KeywordConstant,   // Keyword.Constant
    KeywordType,       // Keyword.Type
    GenericDeleted,    // Generic.Deleted
    PlainText,         // Text
}

impl TokenCategory {
    /// Short CSS class used by Pygments-compatible stylesheets.
    ///
    /// Plain text has no class; formatters emit it without a wrapper.
    pub fn short_class(self) -> &'static str {
        match self {
            Self::Whitespace => "w",
            Self::CommentLine => "c1",
            Self::CommentBlock => "cm",
            Self::CommentPreproc => "cp",
            Self::NumberInteger => "mi",
            Self::NumberFloat => "mf",
            Self::String => "s",
            Self::StringChar => "sc",
            Self::StringOther => "sx",
            Self::Punctuation => "p",
            Self::Operator => "o",
            Self::Name => "n",
            Self::NameVariable => "nv",
            Self::NameVariableMagic => "vm",
            Self::NameBuiltin => "nb",
            Self::Keyword => "k",
            Self::KeywordConstant => "kc",
            Self::KeywordType => "kt",
            Self::GenericDeleted => "gd",
            Self::PlainText => "",
        }
    }

    /// Dotted token type name, e.g. `Name.Variable.Magic`.
    pub fn qualname(self) -> &'static str {
        match self {
            Self::Whitespace => "Text.Whitespace",
            Self::CommentLine => "Comment.Single",
            Self::CommentBlock => "Comment.Multiline",
            Self::CommentPreproc => "Comment.Preproc",
            Self::NumberInteger => "Literal.Number.Integer",
            Self::NumberFloat => "Literal.Number.Float",
            Self::String => "Literal.String",
            Self::StringChar => "Literal.String.Char",
            Self::StringOther => "Literal.String.Other",
            Self::Punctuation => "Punctuation",
            Self::Operator => "Operator",
            Self::Name => "Name",
            Self::NameVariable => "Name.Variable",
            Self::NameVariableMagic => "Name.Variable.Magic",
            Self::NameBuiltin => "Name.Builtin",
            Self::Keyword => "Keyword",
            Self::KeywordConstant => "Keyword.Constant",
            Self::KeywordType => "Keyword.Type",
            Self::GenericDeleted => "Generic.Deleted",
            Self::PlainText => "Text",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualname())
    }
}

impl<'src> Token<'src> {
    /// Builds the token covering `src[start..end]`.
    pub(crate) fn spanning(category: TokenCategory, src: &'src str, start: usize, end: usize) -> Self {
        Self {
            category,
            text: &src[start..end],
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// 1-based line and column of the first byte of this token in `src`.
    ///
    /// Columns count bytes. Walking a whole token stream is better served by
    /// [`Loc::advance`](crate::utils::core::Loc::advance).
    pub fn line_col(&self, src: &str) -> (usize, usize) {
        let before = &src[..self.start.min(src.len())];
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        (before.matches('\n').count() + 1, before.len() - line_start + 1)
    }
}
