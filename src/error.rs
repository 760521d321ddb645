use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {path}: {reason}")]
    FileParse { path: PathBuf, reason: String },

    #[error("Config file {path} has no recognized 'version': {reason}")]
    Version { path: PathBuf, reason: String },

    #[error(
        "No config file manager registered for {path} — supported extensions are toml, yaml, yml, json"
    )]
    UnsupportedExtension { path: PathBuf },

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{url}' is not a valid file:// URL")]
    InvalidFileUrl { url: String },

    #[error("No '{section}' section for command '{command}' in environment '{env}'")]
    SectionNotFound {
        env: String,
        command: String,
        section: String,
    },
}

impl ConfigError {
    /// True for the variants a caller may treat as "the file itself is broken"
    /// (as opposed to a missing or never-written file).
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConfigError::FileParse { .. })
    }
}
