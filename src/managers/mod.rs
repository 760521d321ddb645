//! Format-specific [`FileManager`](crate::format::FileManager) adapters, one
//! file per format.

mod json;
mod toml;
mod yaml;

pub use json::JsonFileManager;
pub use toml::TomlFileManager;
pub use yaml::YamlFileManager;
