//! HTML output for token streams.

use crate::lexer::{LexError, Token};
use crate::registry::Registry;

/// Wraps every token in a `<span>` carrying its short CSS class.
///
/// Plain text is written without a wrapper. Token text is HTML-escaped.
pub fn html(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.len() + 20).sum());
    for token in tokens {
        match token.category.short_class() {
            "" => escape_into(&mut out, token.text),
            class => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                escape_into(&mut out, token.text);
                out.push_str("</span>");
            }
        }
    }
    out
}

/// [`html`] wrapped the way the site marks up code blocks.
pub fn code_block(tokens: &[Token]) -> String {
    format!("<pre><code class=\"hl\">{}</code></pre>", html(tokens))
}

/// Highlights `code` as the language named `tag` and wraps it as a code block.
pub fn highlight_block(registry: &Registry, tag: &str, code: &str) -> Result<String, LexError> {
    let tokens = registry.lex(tag, code)?;
    Ok(code_block(&tokens))
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
