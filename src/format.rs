//! Format detection and the file-manager contract.
//!
//! A config file is bound to exactly one [`FileManager`] implementation,
//! chosen by file extension at construction time and never re-resolved. All
//! managers speak the same three-function contract over the neutral
//! [`Document`] type:
//!
//! - `read` — missing or unreadable files degrade to an empty document (a
//!   missing config file is a normal first-run state, so I/O errors here are
//!   debug-logged and swallowed); files that exist but do not parse are an
//!   error.
//! - `write` — no-op on an empty document, full overwrite otherwise. The
//!   reserved comment entry is emitted as a native comment, not as data.
//! - `put_comment` — stages a comment on the document for the next write.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::ConfigError;
use crate::managers::{JsonFileManager, TomlFileManager, YamlFileManager};

/// The neutral in-memory document: environment → command-key → section →
/// key → value, plus the top-level `version` entry.
pub type Document = serde_json::Map<String, Value>;

/// Reserved key holding a staged comment. Converted to a native format-level
/// comment on write and stripped from the data payload.
pub const COMMENT_KEY: &str = "__comment__";

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Detect a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect a format from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// The manager implementing this format.
    pub fn manager(self) -> &'static dyn FileManager {
        match self {
            Self::Toml => &TomlFileManager,
            Self::Yaml => &YamlFileManager,
            Self::Json => &JsonFileManager,
        }
    }
}

/// Per-format read/write/comment strategy.
pub trait FileManager: Send + Sync {
    fn format(&self) -> Format;

    /// Load the document at `path`. Missing or unreadable files yield an
    /// empty document; present-but-invalid content is a
    /// [`ConfigError::FileParse`].
    fn read(&self, path: &Path) -> Result<Document, ConfigError>;

    /// Serialize `document` to `path`, overwriting prior contents. Writing an
    /// empty document is a no-op that never creates or touches the file.
    fn write(&self, document: &Document, path: &Path) -> Result<(), ConfigError>;

    /// Return `document` with `comment` staged for the next write.
    fn put_comment(&self, mut document: Document, comment: &str) -> Document {
        document.insert(COMMENT_KEY.to_string(), Value::String(comment.to_string()));
        document
    }
}

/// Resolve the manager for a config file path, validating its extension
/// against the registered format table.
pub fn manager_for(path: &Path) -> Result<&'static dyn FileManager, ConfigError> {
    Format::from_path(path)
        .map(Format::manager)
        .ok_or_else(|| ConfigError::UnsupportedExtension {
            path: path.to_path_buf(),
        })
}

/// Shared read policy: file content, or `None` when the file is missing or
/// cannot be opened.
pub(crate) fn read_source(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "config file not readable, treating as empty");
            None
        }
    }
}

/// Split a staged comment out of the document, leaving only data entries.
pub(crate) fn split_comment(document: &Document) -> (Document, Option<String>) {
    let mut data = document.clone();
    let comment = data
        .remove(COMMENT_KEY)
        .and_then(|v| v.as_str().map(str::to_string));
    (data, comment)
}
