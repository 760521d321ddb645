//! Line-oriented `.env` parser for parameter files referenced via `file://`.
//!
//! The syntax is deliberately small: blank lines and `#` comments are skipped,
//! `KEY=VALUE` pairs split on the first `=`, and a double-quoted value may span
//! multiple lines. A quoted value stays open until a line ends with a `"` that
//! is not preceded by a backslash; the captured lines are newline-joined with
//! the surrounding quotes stripped. The escape rule is checked only on the
//! final two characters of a line, so `\\"` keeps the value open even though
//! the backslash itself is escaped. Consumers rely on that exact behavior for
//! existing files, so it is preserved rather than tightened.

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::error::ConfigError;
use crate::format::Document;

/// Parse `.env` content into a flat string-valued document.
///
/// `path` is only used for error reporting; reading the file is the caller's
/// concern.
pub fn parse_env(content: &str, path: &Path) -> Result<Document, ConfigError> {
    let mut document = Document::new();
    // Open multiline capture: key plus the lines collected so far.
    let mut open: Option<(String, Vec<String>)> = None;

    for line in content.lines() {
        if let Some((key, mut lines)) = open.take() {
            if ends_with_unescaped_quote(line) {
                lines.push(line[..line.len() - 1].to_string());
                document.insert(key, Value::String(lines.join("\n")));
            } else {
                lines.push(line.to_string());
                open = Some((key, lines));
            }
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            warn!(path = %path.display(), line = trimmed, "skipping env line without `=`");
            continue;
        };
        let key = key.trim().to_string();
        let value = value.trim();

        if value.starts_with('"') && !closed_on_same_line(value) {
            open = Some((key, vec![value[1..].to_string()]));
        } else {
            document.insert(key, Value::String(unquote(value).to_string()));
        }
    }

    if let Some((key, _)) = open {
        return Err(ConfigError::FileParse {
            path: path.to_path_buf(),
            reason: format!("unterminated quoted value for key `{key}`"),
        });
    }
    Ok(document)
}

/// A value that opened with `"` is complete on its own line only when it also
/// ends with an unescaped `"` and that quote is not the opening one.
fn closed_on_same_line(value: &str) -> bool {
    value.len() >= 2 && ends_with_unescaped_quote(value)
}

fn ends_with_unescaped_quote(line: &str) -> bool {
    line.ends_with('"') && !line.ends_with("\\\"")
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(content: &str) -> Result<Document, ConfigError> {
        parse_env(content, Path::new("params.env"))
    }

    // --- plain pairs ---

    #[test]
    fn simple_pairs() {
        let document = parse("A=1\nB=hello\n").unwrap();
        assert_eq!(document.get("A"), Some(&json!("1")));
        assert_eq!(document.get("B"), Some(&json!("hello")));
    }

    #[test]
    fn split_on_first_equals_only() {
        let document = parse("URL=host=db port=5432\n").unwrap();
        assert_eq!(document.get("URL"), Some(&json!("host=db port=5432")));
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let document = parse("  KEY  =  value  \n").unwrap();
        assert_eq!(document.get("KEY"), Some(&json!("value")));
    }

    #[test]
    fn blank_and_comment_lines_skipped() {
        let document = parse("\n# a comment\n  \nA=1\n").unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document.get("A"), Some(&json!("1")));
    }

    #[test]
    fn line_without_equals_skipped() {
        let document = parse("not a pair\nA=1\n").unwrap();
        assert_eq!(document.len(), 1);
        assert_eq!(document.get("A"), Some(&json!("1")));
    }

    // --- quoted values ---

    #[test]
    fn single_line_quotes_stripped() {
        let document = parse("KEY=\"with spaces\"\n").unwrap();
        assert_eq!(document.get("KEY"), Some(&json!("with spaces")));
    }

    #[test]
    fn multiline_value_newline_joined() {
        let document = parse("KEY=\"line1\nline2\"\nAFTER=1\n").unwrap();
        assert_eq!(document.get("KEY"), Some(&json!("line1\nline2")));
        assert_eq!(document.get("AFTER"), Some(&json!("1")));
    }

    #[test]
    fn escaped_quote_keeps_value_open() {
        let document = parse("KEY=\"start \\\"\nend\"\n").unwrap();
        assert_eq!(document.get("KEY"), Some(&json!("start \\\"\nend")));
    }

    #[test]
    fn capture_lines_kept_raw() {
        let document = parse("KEY=\"a\n  # not a comment\nb\"\n").unwrap();
        assert_eq!(document.get("KEY"), Some(&json!("a\n  # not a comment\nb")));
    }

    #[test]
    fn unterminated_quote_is_error() {
        let result = parse("KEY=\"never closed\nstill open\n");
        match result {
            Err(ConfigError::FileParse { reason, .. }) => {
                assert!(reason.contains("KEY"), "reason should name the key: {reason}");
            }
            other => panic!("expected FileParse, got {other:?}"),
        }
    }

    #[test]
    fn empty_content_is_empty_document() {
        assert!(parse("").unwrap().is_empty());
    }
}
