//! YAML adapter using `serde_yaml`. Comments use the `#` line syntax,
//! emitted above the document body.

use std::path::Path;

use crate::convert::{json_to_yaml, yaml_to_json};
use crate::error::ConfigError;
use crate::format::{read_source, split_comment, Document, FileManager, Format};

pub struct YamlFileManager;

impl FileManager for YamlFileManager {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn read(&self, path: &Path) -> Result<Document, ConfigError> {
        let Some(content) = read_source(path) else {
            return Ok(Document::new());
        };
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        match yaml_to_json(value) {
            serde_json::Value::Object(map) => Ok(map),
            // An empty YAML file parses to null, which is a valid empty config.
            serde_json::Value::Null => Ok(Document::new()),
            other => Err(ConfigError::FileParse {
                path: path.to_path_buf(),
                reason: format!("top-level value must be a mapping, found {other}"),
            }),
        }
    }

    fn write(&self, document: &Document, path: &Path) -> Result<(), ConfigError> {
        if document.is_empty() {
            return Ok(());
        }
        let (data, comment) = split_comment(document);

        let yaml = json_to_yaml(&serde_json::Value::Object(data));
        let body = serde_yaml::to_string(&yaml).map_err(|e| ConfigError::FileParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let rendered = match comment {
            Some(text) => {
                let mut out = String::new();
                for line in text.lines() {
                    out.push_str("# ");
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(&body);
                out
            }
            None => body,
        };

        std::fs::write(path, rendered).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
