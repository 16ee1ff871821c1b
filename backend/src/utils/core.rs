use std::fmt;

/// A position in an input file, printed as `path:line:column`.
#[derive(Clone, Copy, Debug)]
pub struct Loc<'a> {
    pub input_path: &'a str,
    pub line_number: usize,
    pub line_offset: usize,
}

impl<'a> Loc<'a> {
    /// The first byte of `input_path`.
    pub fn start(input_path: &'a str) -> Self {
        Self {
            input_path,
            line_number: 1,
            line_offset: 1,
        }
    }

    /// Moves past `text`, which must directly follow the current position.
    ///
    /// Columns count bytes, matching [`Token::line_col`](crate::lexer::Token::line_col).
    pub fn advance(&mut self, text: &str) {
        match text.rfind('\n') {
            Some(nl) => {
                self.line_number += text.matches('\n').count();
                self.line_offset = text.len() - nl;
            }
            None => self.line_offset += text.len(),
        }
    }
}

impl<'a> fmt::Display for Loc<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.input_path, self.line_number, self.line_offset
        )
    }
}
