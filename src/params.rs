//! Parameter-override resolution: `Key=Value` tokens, `file://` references,
//! and environment-variable expansion.
//!
//! This is a stateless utility layered next to [`SamConfig`](crate::SamConfig):
//! commands call it to turn a raw `--parameter-overrides` string into
//! structured maps before persisting or applying values. Direct tokens and
//! file-sourced parameters are kept separate so the caller controls which side
//! wins on collision.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::convert::yaml_to_json;
use crate::envfile::parse_env;
use crate::error::ConfigError;
use crate::expand;
use crate::format::Document;

const FILE_URL_PREFIX: &str = "file://";

/// Overrides split by origin: `direct` holds inline `Key=Value` tokens,
/// `file_params` holds keys merged from `file://` references (later files win
/// on collision).
#[derive(Debug, Default, PartialEq)]
pub struct ResolvedOverrides {
    pub direct: Document,
    pub file_params: Document,
}

pub fn is_file_url(token: &str) -> bool {
    token.starts_with(FILE_URL_PREFIX)
}

/// Extract the filesystem path from a `file://` URL, expanding `$VAR`
/// references against the process environment. A `file:///C:/...` form has
/// the spurious leading slash before the drive letter removed.
pub fn parse_file_url(url: &str) -> Result<String, ConfigError> {
    parse_file_url_with(url, |name| std::env::var(name).ok())
}

fn parse_file_url_with<F>(url: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = url.strip_prefix(FILE_URL_PREFIX) else {
        return Err(ConfigError::InvalidFileUrl {
            url: url.to_string(),
        });
    };
    Ok(strip_drive_slash(expand::expand_with(raw, lookup)))
}

fn strip_drive_slash(path: String) -> String {
    let bytes = path.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
        path[1..].to_string()
    } else {
        path
    }
}

/// Load a parameter file, dispatching on extension: `.json` (object top
/// level), `.yaml`/`.yml` (mapping top level, empty file allowed), `.env`
/// (see [`crate::envfile`]). Any other extension is a parse error. A missing
/// file surfaces as an I/O error so the caller can tell a broken reference
/// from malformed content.
pub fn load_from_file(path: &Path) -> Result<Document, ConfigError> {
    if path.is_dir() {
        return Err(ConfigError::FileParse {
            path: path.to_path_buf(),
            reason: "path is a directory, expected a parameter file".to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "json" => {
            let value: Value =
                serde_json::from_str(&content).map_err(|e| ConfigError::FileParse {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            match value {
                Value::Object(map) => Ok(map),
                other => Err(ConfigError::FileParse {
                    path: path.to_path_buf(),
                    reason: format!("top-level value must be an object, found {other}"),
                }),
            }
        }
        "yaml" | "yml" => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            match yaml_to_json(value) {
                Value::Object(map) => Ok(map),
                Value::Null => Ok(Document::new()),
                other => Err(ConfigError::FileParse {
                    path: path.to_path_buf(),
                    reason: format!("top-level value must be a mapping, found {other}"),
                }),
            }
        }
        "env" => parse_env(&content, path),
        other => Err(ConfigError::FileParse {
            path: path.to_path_buf(),
            reason: format!("unsupported parameter file extension `{other}`"),
        }),
    }
}

/// Resolve an override string into direct and file-sourced parameter maps.
///
/// The string is tokenized with shell quoting rules so quoted values keep
/// their spaces, falling back to plain whitespace splitting when quoting is
/// unbalanced. Tokens that are neither `file://` URLs nor `Key=Value` pairs
/// are skipped with a warning. A failure loading a referenced file is never
/// swallowed; the reference was explicit, so the caller must see it.
pub fn resolve_parameter_files(overrides: &str) -> Result<ResolvedOverrides, ConfigError> {
    let tokens = tokenize(overrides);
    let mut resolved = ResolvedOverrides::default();

    for token in tokens {
        if is_file_url(&token) {
            let path = parse_file_url(&token)?;
            let loaded = load_from_file(Path::new(&path))?;
            debug!(url = token.as_str(), count = loaded.len(), "loaded parameter file");
            for (key, value) in loaded {
                resolved.file_params.insert(key, value);
            }
        } else if let Some((key, value)) = token.split_once('=') {
            resolved
                .direct
                .insert(key.trim().to_string(), Value::String(value.trim().to_string()));
        } else {
            warn!(token = token.as_str(), "ignoring malformed parameter override token");
        }
    }
    Ok(resolved)
}

fn tokenize(input: &str) -> Vec<String> {
    shlex::split(input).unwrap_or_else(|| {
        debug!("shell tokenization failed, falling back to whitespace split");
        input.split_whitespace().map(String::from).collect()
    })
}

/// Expand `$VAR`/`${VAR}` references in every string-valued entry against the
/// process environment. Non-string values and unresolvable references pass
/// through unchanged.
pub fn expand_environment_variables(params: &Document) -> Document {
    expand_environment_variables_with(params, |name| std::env::var(name).ok())
}

fn expand_environment_variables_with<F>(params: &Document, lookup: F) -> Document
where
    F: Fn(&str) -> Option<String>,
{
    params
        .iter()
        .map(|(key, value)| {
            let expanded = match value {
                Value::String(s) => Value::String(expand::expand_with(s, &lookup)),
                other => other.clone(),
            };
            (key.clone(), expanded)
        })
        .collect()
}

/// Parse the legacy flat `parameter_overrides` string into a map. Tokens
/// without `=` are dropped without logging: this path only reads strings the
/// tool itself wrote in earlier versions, it is not input validation.
pub fn parse_parameter_overrides(value: Option<&str>) -> Document {
    let Some(raw) = value else {
        return Document::new();
    };
    if raw.trim().is_empty() {
        return Document::new();
    }
    let mut params = Document::new();
    for token in tokenize(raw) {
        if let Some((key, value)) = token.split_once('=') {
            params.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
    params
}
