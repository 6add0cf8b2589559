//! JSON pretty printing with terminal syntax highlighting
//!
//! Documents are re-encoded with keys sorted lexicographically and four-space
//! indentation, the same layout as Python's `json.dumps(indent=4, sort_keys=True)`:
//! non-ASCII characters in strings and keys are written as `\uXXXX` escapes.
//! Numbers keep the exact text they had in the input (serde_json's
//! `arbitrary_precision`), so large integers are never rounded through `f64`.
//! The whole document is rendered into a buffer before anything is written, so
//! invalid input never produces partial output.

use std::io::Write;

use colored::Colorize;
use serde_json::Value;

use crate::error::PrintError;

const INDENT: &str = "    ";

/// Lexical class of a rendered token
#[derive(Debug, Clone, Copy)]
enum Token {
    Key,
    String,
    Number,
    Literal,
}

#[derive(Debug, Clone, Copy)]
enum Palette {
    Plain,
    Terminal,
}

impl Palette {
    fn paint(self, text: &str, token: Token) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Terminal => match token {
                Token::Key => text.blue().to_string(),
                Token::String => text.green().to_string(),
                Token::Number => text.cyan().to_string(),
                Token::Literal => text.magenta().to_string(),
            },
        }
    }
}

/// Re-encode a JSON document with sorted keys and 4-space indentation
pub fn format_json(raw: &str) -> Result<String, PrintError> {
    render(raw, Palette::Plain)
}

/// Same layout as [`format_json`], with ANSI colors applied to tokens
///
/// Colors are subject to the `colored` crate's global switches (`NO_COLOR`,
/// `CLICOLOR_FORCE`, tty detection).
pub fn highlight_json(raw: &str) -> Result<String, PrintError> {
    render(raw, Palette::Terminal)
}

/// Render `raw` and write it to `out` followed by a newline
pub fn print_json<W: Write>(raw: &str, out: &mut W, color: bool) -> Result<(), PrintError> {
    let rendered = if color {
        highlight_json(raw)?
    } else {
        format_json(raw)?
    };
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}

fn render(raw: &str, palette: Palette) -> Result<String, PrintError> {
    let value: Value = serde_json::from_str(raw)?;
    let mut out = String::with_capacity(raw.len() * 2);
    write_value(&mut out, &value, 0, palette);
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, depth: usize, palette: Palette) {
    match value {
        Value::Null | Value::Bool(_) => {
            out.push_str(&palette.paint(&value.to_string(), Token::Literal));
        }
        Value::Number(n) => out.push_str(&palette.paint(&n.to_string(), Token::Number)),
        Value::String(s) => out.push_str(&palette.paint(&quote_ascii(s), Token::String)),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1, palette);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            // Map order depends on serde_json features, so sort explicitly
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

            out.push_str("{\n");
            let last = entries.len() - 1;
            for (i, (key, item)) in entries.into_iter().enumerate() {
                push_indent(out, depth + 1);
                out.push_str(&palette.paint(&quote_ascii(key), Token::Key));
                out.push_str(": ");
                write_value(out, item, depth + 1, palette);
                if i < last {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push('}');
        }
    }
}

/// Quote `s` as a JSON string literal with every non-ASCII character escaped
fn quote_ascii(s: &str) -> String {
    // Display on a string value yields the quoted literal with JSON escapes
    let quoted = Value::from(s).to_string();
    if quoted.is_ascii() {
        return quoted;
    }

    let mut out = String::with_capacity(quoted.len() + 16);
    let mut units = [0u16; 2];
    for c in quoted.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            // Astral characters become a surrogate pair
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
