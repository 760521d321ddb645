//! JSON adapter. JSON has no comment syntax, so a staged comment is dropped
//! with a warning at write time instead of being emitted.

use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::format::{read_source, split_comment, Document, FileManager, Format};

pub struct JsonFileManager;

impl FileManager for JsonFileManager {
    fn format(&self) -> Format {
        Format::Json
    }

    fn read(&self, path: &Path) -> Result<Document, ConfigError> {
        let Some(content) = read_source(path) else {
            return Ok(Document::new());
        };
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::FileParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        match value {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(ConfigError::FileParse {
                path: path.to_path_buf(),
                reason: format!("top-level value must be an object, found {other}"),
            }),
        }
    }

    fn write(&self, document: &Document, path: &Path) -> Result<(), ConfigError> {
        if document.is_empty() {
            return Ok(());
        }
        let (data, comment) = split_comment(document);
        if comment.is_some() {
            warn!(path = %path.display(), "JSON does not support comments, dropping staged comment");
        }

        let body = serde_json::to_string_pretty(&data).map_err(|e| ConfigError::FileParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        std::fs::write(path, body + "\n").map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn doc(value: serde_json::Value) -> Document {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn read_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let document = JsonFileManager.read(&dir.path().join("absent.json")).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn read_invalid_content_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samconfig.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            JsonFileManager.read(&path),
            Err(ConfigError::FileParse { .. })
        ));
    }

    #[test]
    fn read_non_object_top_level_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samconfig.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            JsonFileManager.read(&path),
            Err(ConfigError::FileParse { .. })
        ));
    }

    #[test]
    fn write_empty_never_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samconfig.json");
        JsonFileManager.write(&Document::new(), &path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samconfig.json");
        let original = doc(json!({
            "version": 0.1,
            "default": {"deploy": {"parameters": {"stack_name": "app", "retries": 3}}}
        }));

        JsonFileManager.write(&original, &path).unwrap();
        assert_eq!(JsonFileManager.read(&path).unwrap(), original);
    }

    #[test]
    fn staged_comment_dropped_without_polluting_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samconfig.json");
        let document = JsonFileManager.put_comment(doc(json!({"version": 0.1})), "hello");

        JsonFileManager.write(&document, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("hello"));
        let loaded = JsonFileManager.read(&path).unwrap();
        assert!(!loaded.contains_key(crate::format::COMMENT_KEY));
        assert!(loaded.contains_key("version"));
    }
}
