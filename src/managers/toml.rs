//! TOML adapter: parses with `toml`, renders through `toml_edit` so staged
//! comments land as real `#` comments above the document body.

use std::path::Path;

use crate::convert::{json_to_toml, toml_to_json};
use crate::error::ConfigError;
use crate::format::{read_source, split_comment, Document, FileManager, Format};

pub struct TomlFileManager;

impl FileManager for TomlFileManager {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn read(&self, path: &Path) -> Result<Document, ConfigError> {
        let Some(content) = read_source(path) else {
            return Ok(Document::new());
        };
        let table: toml::Table =
            content
                .parse()
                .map_err(|e: toml::de::Error| ConfigError::FileParse {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
        let mut document = Document::new();
        for (key, value) in table {
            document.insert(key, toml_to_json(value));
        }
        Ok(document)
    }

    fn write(&self, document: &Document, path: &Path) -> Result<(), ConfigError> {
        if document.is_empty() {
            return Ok(());
        }
        let (data, comment) = split_comment(document);

        let mut table = toml::map::Map::new();
        for (key, value) in &data {
            if let Some(tv) = json_to_toml(value) {
                table.insert(key.clone(), tv);
            }
        }
        let body = toml::to_string_pretty(&table).map_err(|e| ConfigError::FileParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let rendered = match comment {
            Some(text) => {
                let mut doc: toml_edit::DocumentMut =
                    body.parse().map_err(|e: toml_edit::TomlError| {
                        ConfigError::FileParse {
                            path: path.to_path_buf(),
                            reason: e.to_string(),
                        }
                    })?;
                doc.as_table_mut()
                    .decor_mut()
                    .set_prefix(render_comment(&text));
                doc.to_string()
            }
            None => body,
        };

        std::fs::write(path, rendered).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn render_comment(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        out.push_str("# ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
