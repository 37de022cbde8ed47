//! Word-processor wildcard patterns, compiled to regular expressions
//!
//! Supported syntax:
//!
//! | Pattern   | Meaning                         |
//! |-----------|---------------------------------|
//! | `?`       | any single character            |
//! | `*`       | any run of characters (shortest)|
//! | `[abc]`   | one of the listed characters    |
//! | `[a-z]`   | a character in the range        |
//! | `[!abc]`  | any character not listed        |
//! | `{n}` `{n,}` `{n,m}` | repetition of the previous item |
//! | `@`       | one or more of the previous item|
//! | `<` `>`   | start / end of a word           |
//! | `(` `)`   | grouping                        |
//! | `\x`      | literal `x`                     |

use crate::error::HostError;
use regex::Regex;

/// Compile a wildcard pattern
pub(crate) fn compile(pattern: &str, match_case: bool) -> Result<Regex, HostError> {
    let translated = translate(pattern)?;
    let source = if match_case {
        translated
    } else {
        format!("(?i){translated}")
    };
    Regex::new(&source).map_err(|e| HostError::InvalidQuery(e.to_string()))
}

/// Translate wildcard syntax to `regex` syntax
pub(crate) fn translate(pattern: &str) -> Result<String, HostError> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '?' => out.push('.'),
            '*' => out.push_str(".*?"),
            '@' => out.push('+'),
            '<' | '>' => out.push_str(r"\b"),
            '(' | ')' => out.push(ch),
            '\\' => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| HostError::InvalidQuery("dangling escape".to_string()))?;
                out.push_str(&regex::escape(escaped.encode_utf8(&mut [0; 4])));
            }
            '[' => {
                out.push('[');
                if chars.peek() == Some(&'!') {
                    chars.next();
                    out.push('^');
                }
                let mut closed = false;
                for inner in chars.by_ref() {
                    match inner {
                        ']' => {
                            closed = true;
                            break;
                        }
                        '-' => out.push('-'),
                        '\\' | '[' | '^' | '&' | '~' => {
                            out.push('\\');
                            out.push(inner);
                        }
                        other => out.push(other),
                    }
                }
                if !closed {
                    return Err(HostError::InvalidQuery(format!(
                        "unterminated character class in {pattern:?}"
                    )));
                }
                out.push(']');
            }
            '{' => {
                out.push('{');
                let mut closed = false;
                for inner in chars.by_ref() {
                    match inner {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '0'..='9' | ',' => out.push(inner),
                        // Word accepts `{n;m}` in some locales
                        ';' => out.push(','),
                        other => {
                            return Err(HostError::InvalidQuery(format!(
                                "unexpected {other:?} in repetition"
                            )))
                        }
                    }
                }
                if !closed {
                    return Err(HostError::InvalidQuery(format!(
                        "unterminated repetition in {pattern:?}"
                    )));
                }
                out.push('}');
            }
            other => out.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }

    Ok(out)
}
