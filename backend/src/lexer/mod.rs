pub mod core;
pub mod error;
pub mod rule;
pub mod tokens;

pub use self::core::{LexerBuilder, LexerMeta, RegexLexer, State, ROOT};
pub use self::error::{BuildError, LexError};
pub use self::tokens::{Token, TokenCategory};
