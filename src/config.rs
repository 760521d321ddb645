//! The [`SamConfig`] façade over the on-disk configuration document.
//!
//! A `SamConfig` is bound to one file at construction time; the matching
//! [`FileManager`](crate::format::FileManager) is resolved from the filename
//! extension up front so an unsupported extension fails before any read. The
//! document itself is loaded lazily on first access and held in memory until
//! [`SamConfig::flush`] writes it back.
//!
//! Values live under environment -> command key -> section -> key. The
//! reserved `"global"` command key is a fallback layer: reads merge it under
//! command-specific values, and writes that would duplicate a global value
//! are suppressed so the single global copy stays authoritative.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::ConfigError;
use crate::format::{manager_for, Document, FileManager};
use crate::key::to_key;
use crate::params::parse_parameter_overrides;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "samconfig.toml";
pub const DEFAULT_ENV: &str = "default";
pub const DEFAULT_GLOBAL_CMD_KEY: &str = "global";
pub const VERSION_KEY: &str = "version";
pub const DEFAULT_CONFIG_VERSION: f64 = 0.1;

const PARAMETERS_SECTION: &str = "parameters";
const TEMPLATE_PARAMETERS_KEY: &str = "template_parameters";
const TEMPLATE_TAGS_KEY: &str = "template_tags";
const LEGACY_PARAMETER_OVERRIDES_KEY: &str = "parameter_overrides";
const LEGACY_TAGS_KEY: &str = "tags";

pub struct SamConfig {
    path: PathBuf,
    manager: &'static dyn FileManager,
    document: Option<Document>,
    dirty: bool,
}

impl SamConfig {
    /// Bind to `filename` inside `config_dir`. Fails immediately when the
    /// extension has no registered file manager.
    pub fn new(config_dir: impl AsRef<Path>, filename: &str) -> Result<Self, ConfigError> {
        let path = config_dir.as_ref().join(filename);
        let manager = manager_for(&path)?;
        Ok(Self {
            path,
            manager,
            document: None,
            dirty: false,
        })
    }

    /// Bind to [`DEFAULT_CONFIG_FILE_NAME`] inside `config_dir`.
    pub fn with_default_name(config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::new(config_dir, DEFAULT_CONFIG_FILE_NAME)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the section's key/value mapping for a command and environment,
    /// merged over the global command key's same section. Command-specific
    /// keys win on conflict. Errors when neither the command nor the global
    /// layer has the section.
    pub fn get_all<S: AsRef<str>>(
        &mut self,
        cmd_names: &[S],
        section: &str,
        env: &str,
    ) -> Result<Document, ConfigError> {
        let cmd_key = to_key(cmd_names);
        self.ensure_loaded()?;
        let document = self.document.get_or_insert_with(Document::new);

        let global = lookup_section(document, env, DEFAULT_GLOBAL_CMD_KEY, section);
        let specific = if cmd_key == DEFAULT_GLOBAL_CMD_KEY {
            None
        } else {
            lookup_section(document, env, &cmd_key, section)
        };

        match (global, specific) {
            (None, None) => Err(ConfigError::SectionNotFound {
                env: env.to_string(),
                command: cmd_key,
                section: section.to_string(),
            }),
            (global, specific) => {
                let mut merged = global.cloned().unwrap_or_default();
                if let Some(specific) = specific {
                    for (key, value) in specific {
                        merged.insert(key.clone(), value.clone());
                    }
                }
                Ok(merged)
            }
        }
    }

    /// Write `value` under environment -> command key -> section -> key,
    /// creating intermediate mappings as needed.
    ///
    /// Deduplication against global is an explicit read-compare-write: when
    /// the command is not the global key and the value equals the existing
    /// global value, the command-specific write is skipped and any stale
    /// command-local copy of the key is removed.
    pub fn put<S: AsRef<str>>(
        &mut self,
        cmd_names: &[S],
        section: &str,
        key: &str,
        value: Value,
        env: &str,
    ) -> Result<(), ConfigError> {
        let cmd_key = to_key(cmd_names);
        self.ensure_loaded()?;
        let document = self.document.get_or_insert_with(Document::new);

        if cmd_key != DEFAULT_GLOBAL_CMD_KEY {
            let matches_global = lookup_section(document, env, DEFAULT_GLOBAL_CMD_KEY, section)
                .and_then(|global| global.get(key))
                == Some(&value);
            if matches_global {
                if let Some(section_map) = section_mut(document, env, &cmd_key, section)
                    && section_map.shift_remove(key).is_some()
                {
                    debug!(command = cmd_key.as_str(), key, "removed command-local duplicate of global value");
                    self.dirty = true;
                }
                debug!(command = cmd_key.as_str(), key, "value matches global entry, keeping single copy");
                return Ok(());
            }
        }

        let section_map = entry_object(entry_object(entry_object(document, env), &cmd_key), section);
        section_map.insert(key.to_string(), value);
        self.dirty = true;
        Ok(())
    }

    /// Set one key inside the `template_parameters` mapping of the
    /// `parameters` section.
    pub fn put_template_parameter<S: AsRef<str>>(
        &mut self,
        cmd_names: &[S],
        key: &str,
        value: Value,
        env: &str,
    ) -> Result<(), ConfigError> {
        self.put_nested(cmd_names, TEMPLATE_PARAMETERS_KEY, key, value, env)
    }

    /// Set one key inside the `template_tags` mapping of the `parameters`
    /// section.
    pub fn put_template_tag<S: AsRef<str>>(
        &mut self,
        cmd_names: &[S],
        key: &str,
        value: Value,
        env: &str,
    ) -> Result<(), ConfigError> {
        self.put_nested(cmd_names, TEMPLATE_TAGS_KEY, key, value, env)
    }

    fn put_nested<S: AsRef<str>>(
        &mut self,
        cmd_names: &[S],
        nested_key: &str,
        key: &str,
        value: Value,
        env: &str,
    ) -> Result<(), ConfigError> {
        let cmd_key = to_key(cmd_names);
        self.ensure_loaded()?;
        let document = self.document.get_or_insert_with(Document::new);

        let mut map = lookup_section(document, env, &cmd_key, PARAMETERS_SECTION)
            .and_then(|section| section.get(nested_key))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        map.insert(key.to_string(), value);
        self.put(cmd_names, PARAMETERS_SECTION, nested_key, Value::Object(map), env)
    }

    /// Template parameters for a command: the new-schema
    /// `template_parameters` mapping when present and non-empty, otherwise
    /// the parsed legacy `parameter_overrides` string, otherwise empty.
    pub fn get_template_parameters<S: AsRef<str>>(
        &mut self,
        cmd_names: &[S],
        env: &str,
    ) -> Result<Document, ConfigError> {
        self.resolve_with_fallback(cmd_names, env, TEMPLATE_PARAMETERS_KEY, LEGACY_PARAMETER_OVERRIDES_KEY)
    }

    /// Template tags for a command, with the same new-schema-first, legacy
    /// `tags`-string fallback as [`SamConfig::get_template_parameters`].
    pub fn get_template_tags<S: AsRef<str>>(
        &mut self,
        cmd_names: &[S],
        env: &str,
    ) -> Result<Document, ConfigError> {
        self.resolve_with_fallback(cmd_names, env, TEMPLATE_TAGS_KEY, LEGACY_TAGS_KEY)
    }

    // One resolver for both parameters and tags; diverging precedence rules
    // between the two is exactly the bug this shape prevents.
    fn resolve_with_fallback<S: AsRef<str>>(
        &mut self,
        cmd_names: &[S],
        env: &str,
        new_key: &str,
        legacy_key: &str,
    ) -> Result<Document, ConfigError> {
        let section = match self.get_all(cmd_names, PARAMETERS_SECTION, env) {
            Ok(section) => section,
            Err(ConfigError::SectionNotFound { .. }) => return Ok(Document::new()),
            Err(other) => return Err(other),
        };

        if let Some(Value::Object(map)) = section.get(new_key)
            && !map.is_empty()
        {
            return Ok(map.clone());
        }
        let legacy = section.get(legacy_key).and_then(Value::as_str);
        Ok(parse_parameter_overrides(legacy))
    }

    /// Environment names present in the document, in encounter order. Only
    /// mapping-valued top-level keys qualify, which excludes the version
    /// marker and any staged comment.
    pub fn get_stage_configuration_names(&mut self) -> Result<Vec<String>, ConfigError> {
        self.ensure_loaded()?;
        let document = self.document.get_or_insert_with(Document::new);
        Ok(document
            .iter()
            .filter(|(_, value)| value.is_object())
            .map(|(name, _)| name.clone())
            .collect())
    }

    /// Write the in-memory document back through the bound file manager.
    /// No-op when nothing was mutated. A document written without a version
    /// marker gets [`DEFAULT_CONFIG_VERSION`] injected, placed first.
    pub fn flush(&mut self) -> Result<(), ConfigError> {
        if !self.dirty {
            return Ok(());
        }
        let document = self.document.take().unwrap_or_default();
        let ordered = with_version_first(document);
        self.manager.write(&ordered, &self.path)?;
        self.document = Some(ordered);
        self.dirty = false;
        Ok(())
    }

    /// Validate that a non-empty document carries a numeric `version` key.
    /// A brand-new (empty) document passes; first use has nothing to check.
    pub fn sanity_check(&mut self) -> Result<(), ConfigError> {
        self.ensure_loaded()?;
        let path = self.path.clone();
        let document = self.document.get_or_insert_with(Document::new);
        if document.is_empty() {
            return Ok(());
        }
        match document.get(VERSION_KEY) {
            Some(version) if version.is_number() => Ok(()),
            Some(other) => Err(ConfigError::Version {
                path,
                reason: format!("unsupported version value `{other}`"),
            }),
            None => Err(ConfigError::Version {
                path,
                reason: "missing `version` key".to_string(),
            }),
        }
    }

    /// Stage a comment to be rendered natively by the bound format on the
    /// next flush.
    pub fn put_comment(&mut self, comment: &str) -> Result<(), ConfigError> {
        self.ensure_loaded()?;
        let document = self.document.take().unwrap_or_default();
        self.document = Some(self.manager.put_comment(document, comment));
        self.dirty = true;
        Ok(())
    }

    fn ensure_loaded(&mut self) -> Result<(), ConfigError> {
        if self.document.is_none() {
            self.document = Some(self.manager.read(&self.path)?);
        }
        Ok(())
    }
}

fn lookup_section<'a>(
    document: &'a Document,
    env: &str,
    cmd_key: &str,
    section: &str,
) -> Option<&'a Document> {
    document
        .get(env)?
        .as_object()?
        .get(cmd_key)?
        .as_object()?
        .get(section)?
        .as_object()
}

fn section_mut<'a>(
    document: &'a mut Document,
    env: &str,
    cmd_key: &str,
    section: &str,
) -> Option<&'a mut Document> {
    document
        .get_mut(env)?
        .as_object_mut()?
        .get_mut(cmd_key)?
        .as_object_mut()?
        .get_mut(section)?
        .as_object_mut()
}

// Scalars found in intermediate positions are replaced so `put` always lands
// on a mapping.
fn entry_object<'a>(parent: &'a mut Document, key: &str) -> &'a mut Document {
    let slot = parent
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Document::new()));
    if !slot.is_object() {
        *slot = Value::Object(Document::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just normalized to an object"),
    }
}

fn with_version_first(document: Document) -> Document {
    let version = document
        .get(VERSION_KEY)
        .cloned()
        .unwrap_or_else(|| Value::from(DEFAULT_CONFIG_VERSION));
    let mut ordered = Document::new();
    ordered.insert(VERSION_KEY.to_string(), version);
    for (key, value) in document {
        if key != VERSION_KEY {
            ordered.insert(key, value);
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> SamConfig {
        SamConfig::with_default_name(dir.path()).unwrap()
    }

    fn written_document(config: &SamConfig) -> Document {
        crate::managers::TomlFileManager
            .read(config.path())
            .unwrap()
    }

    // --- construction ---

    #[test]
    fn unsupported_extension_fails_at_construction() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            SamConfig::new(dir.path(), "config.xyz"),
            Err(ConfigError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn default_name_and_path() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        assert!(config.path().ends_with("samconfig.toml"));
        assert!(!config.exists());
    }

    // --- get_all / put ---

    #[test]
    fn put_then_get_all_without_flush() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["deploy"], "parameters", "stack_name", json!("app"), DEFAULT_ENV)
            .unwrap();

        let section = config.get_all(&["deploy"], "parameters", DEFAULT_ENV).unwrap();
        assert_eq!(section.get("stack_name"), Some(&json!("app")));
        assert!(!config.exists());
    }

    #[test]
    fn missing_section_errors() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        assert!(matches!(
            config.get_all(&["deploy"], "parameters", DEFAULT_ENV),
            Err(ConfigError::SectionNotFound { .. })
        ));
    }

    #[test]
    fn command_value_wins_over_global() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["global"], "parameters", "region", json!("g"), DEFAULT_ENV)
            .unwrap();
        config
            .put(&["deploy"], "parameters", "region", json!("c"), DEFAULT_ENV)
            .unwrap();

        let section = config.get_all(&["deploy"], "parameters", DEFAULT_ENV).unwrap();
        assert_eq!(section.get("region"), Some(&json!("c")));
    }

    #[test]
    fn global_value_fills_in_for_any_command() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["global"], "parameters", "region", json!("g"), DEFAULT_ENV)
            .unwrap();

        let section = config.get_all(&["deploy"], "parameters", DEFAULT_ENV).unwrap();
        assert_eq!(section.get("region"), Some(&json!("g")));
    }

    #[test]
    fn put_matching_global_is_suppressed() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["global"], "parameters", "region", json!("x"), DEFAULT_ENV)
            .unwrap();
        config
            .put(&["deploy"], "parameters", "region", json!("x"), DEFAULT_ENV)
            .unwrap();
        config.flush().unwrap();

        let written = written_document(&config);
        let env = written.get(DEFAULT_ENV).and_then(Value::as_object).unwrap();
        assert!(env.contains_key("global"));
        assert!(!env.contains_key("deploy"), "deduplicated write must not create a command entry");
    }

    #[test]
    fn put_differing_from_global_creates_local_entry() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["global"], "parameters", "region", json!("x"), DEFAULT_ENV)
            .unwrap();
        config
            .put(&["deploy"], "parameters", "region", json!("y"), DEFAULT_ENV)
            .unwrap();
        config.flush().unwrap();

        let written = written_document(&config);
        let env = written.get(DEFAULT_ENV).and_then(Value::as_object).unwrap();
        assert!(env.contains_key("deploy"));
    }

    #[test]
    fn put_matching_global_removes_stale_local_copy() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["global"], "parameters", "region", json!("x"), DEFAULT_ENV)
            .unwrap();
        config
            .put(&["deploy"], "parameters", "region", json!("y"), DEFAULT_ENV)
            .unwrap();
        config
            .put(&["deploy"], "parameters", "region", json!("x"), DEFAULT_ENV)
            .unwrap();

        let section = config.get_all(&["deploy"], "parameters", DEFAULT_ENV).unwrap();
        assert_eq!(section.get("region"), Some(&json!("x")));
        config.flush().unwrap();
        let written = written_document(&config);
        let deploy_section = written
            .get(DEFAULT_ENV)
            .and_then(Value::as_object)
            .and_then(|env| env.get("deploy"))
            .and_then(Value::as_object)
            .and_then(|cmd| cmd.get("parameters"))
            .and_then(Value::as_object);
        let has_local = deploy_section.is_some_and(|s| s.contains_key("region"));
        assert!(!has_local, "stale local duplicate should be gone");
    }

    #[test]
    fn multi_segment_commands_use_reversed_key() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["local", "start", "api"], "parameters", "port", json!(5401), DEFAULT_ENV)
            .unwrap();
        config.flush().unwrap();

        let written = written_document(&config);
        let env = written.get(DEFAULT_ENV).and_then(Value::as_object).unwrap();
        assert!(env.contains_key("api_start_local"));
    }

    #[test]
    fn environments_are_isolated() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["deploy"], "parameters", "stack_name", json!("prod-app"), "prod")
            .unwrap();

        assert!(config.get_all(&["deploy"], "parameters", DEFAULT_ENV).is_err());
        let section = config.get_all(&["deploy"], "parameters", "prod").unwrap();
        assert_eq!(section.get("stack_name"), Some(&json!("prod-app")));
    }

    // --- template parameters and tags ---

    #[test]
    fn new_schema_wins_over_legacy_string() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put_template_parameter(&["deploy"], "A", json!("1"), DEFAULT_ENV)
            .unwrap();
        config
            .put(&["deploy"], "parameters", "parameter_overrides", json!("A=2"), DEFAULT_ENV)
            .unwrap();

        let params = config.get_template_parameters(&["deploy"], DEFAULT_ENV).unwrap();
        assert_eq!(params.get("A"), Some(&json!("1")));
    }

    #[test]
    fn legacy_string_parsed_when_no_new_schema() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["deploy"], "parameters", "parameter_overrides", json!("K1=V1 K2=V2"), DEFAULT_ENV)
            .unwrap();

        let params = config.get_template_parameters(&["deploy"], DEFAULT_ENV).unwrap();
        assert_eq!(params.get("K1"), Some(&json!("V1")));
        assert_eq!(params.get("K2"), Some(&json!("V2")));
    }

    #[test]
    fn template_reads_on_fresh_config_are_empty() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        assert!(config.get_template_parameters(&["deploy"], DEFAULT_ENV).unwrap().is_empty());
        assert!(config.get_template_tags(&["deploy"], DEFAULT_ENV).unwrap().is_empty());
    }

    #[test]
    fn template_parameters_accumulate() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put_template_parameter(&["deploy"], "Stage", json!("Prod"), DEFAULT_ENV)
            .unwrap();
        config
            .put_template_parameter(&["deploy"], "Region", json!("eu-west-1"), DEFAULT_ENV)
            .unwrap();

        let params = config.get_template_parameters(&["deploy"], DEFAULT_ENV).unwrap();
        assert_eq!(params, match json!({"Stage": "Prod", "Region": "eu-west-1"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        });
    }

    #[test]
    fn tags_use_their_own_legacy_key() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["deploy"], "parameters", "tags", json!("Team=Platform"), DEFAULT_ENV)
            .unwrap();

        let tags = config.get_template_tags(&["deploy"], DEFAULT_ENV).unwrap();
        assert_eq!(tags.get("Team"), Some(&json!("Platform")));
    }

    // --- stage configuration names ---

    #[test]
    fn stage_names_in_encounter_order_without_version() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg
            .put(&["deploy"], "parameters", "stack_name", json!("a"), DEFAULT_ENV)
            .unwrap();
        cfg
            .put(&["deploy"], "parameters", "stack_name", json!("b"), "staging")
            .unwrap();
        cfg.flush().unwrap();

        let mut reopened = config(&dir);
        let names = reopened.get_stage_configuration_names().unwrap();
        assert_eq!(names, vec!["default".to_string(), "staging".to_string()]);
    }

    // --- flush ---

    #[test]
    fn flush_without_mutation_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config.flush().unwrap();
        assert!(!config.exists());
    }

    #[test]
    fn flush_injects_version_first() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["deploy"], "parameters", "stack_name", json!("app"), DEFAULT_ENV)
            .unwrap();
        config.flush().unwrap();

        let written = written_document(&config);
        let mut keys = written.keys();
        assert_eq!(keys.next().map(String::as_str), Some("version"));
        assert_eq!(written.get("version"), Some(&json!(0.1)));
    }

    #[test]
    fn flush_is_clean_until_next_put() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["deploy"], "parameters", "stack_name", json!("app"), DEFAULT_ENV)
            .unwrap();
        config.flush().unwrap();

        std::fs::remove_file(config.path()).unwrap();
        config.flush().unwrap();
        assert!(!config.exists(), "clean flush must not rewrite the file");

        config
            .put(&["deploy"], "parameters", "stack_name", json!("app2"), DEFAULT_ENV)
            .unwrap();
        config.flush().unwrap();
        assert!(config.exists());
    }

    #[test]
    fn reopened_config_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir);
        cfg
            .put(&["local", "start", "api"], "parameters", "port", json!(5401), DEFAULT_ENV)
            .unwrap();
        cfg.flush().unwrap();

        let mut reopened = config(&dir);
        let section = reopened
            .get_all(&["local", "start", "api"], "parameters", DEFAULT_ENV)
            .unwrap();
        assert_eq!(section.get("port"), Some(&json!(5401)));
    }

    // --- sanity check ---

    #[test]
    fn fresh_config_passes_sanity_check() {
        let dir = TempDir::new().unwrap();
        config(&dir).sanity_check().unwrap();
    }

    #[test]
    fn numeric_version_passes_sanity_check() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("samconfig.toml"), "version = 0.1\n").unwrap();
        config(&dir).sanity_check().unwrap();
    }

    #[test]
    fn missing_version_fails_sanity_check() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("samconfig.toml"),
            "[default.deploy.parameters]\nstack_name = \"app\"\n",
        )
        .unwrap();
        assert!(matches!(
            config(&dir).sanity_check(),
            Err(ConfigError::Version { .. })
        ));
    }

    #[test]
    fn non_numeric_version_fails_sanity_check() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("samconfig.toml"), "version = \"0.1\"\n").unwrap();
        assert!(matches!(
            config(&dir).sanity_check(),
            Err(ConfigError::Version { .. })
        ));
    }

    // --- comments ---

    #[test]
    fn staged_comment_rendered_on_flush() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config
            .put(&["deploy"], "parameters", "stack_name", json!("app"), DEFAULT_ENV)
            .unwrap();
        config.put_comment("managed by the CLI").unwrap();
        config.flush().unwrap();

        let content = std::fs::read_to_string(config.path()).unwrap();
        assert!(content.starts_with("# managed by the CLI\n"));
        assert!(!written_document(&config).contains_key(crate::format::COMMENT_KEY));
    }

    // --- yaml and json backends ---

    #[test]
    fn yaml_backend_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut config = SamConfig::new(dir.path(), "samconfig.yaml").unwrap();
        config
            .put(&["deploy"], "parameters", "stack_name", json!("app"), DEFAULT_ENV)
            .unwrap();
        config.flush().unwrap();

        let mut reopened = SamConfig::new(dir.path(), "samconfig.yaml").unwrap();
        let section = reopened.get_all(&["deploy"], "parameters", DEFAULT_ENV).unwrap();
        assert_eq!(section.get("stack_name"), Some(&json!("app")));
    }

    #[test]
    fn json_backend_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut config = SamConfig::new(dir.path(), "samconfig.json").unwrap();
        config
            .put(&["deploy"], "parameters", "stack_name", json!("app"), DEFAULT_ENV)
            .unwrap();
        config.flush().unwrap();

        let mut reopened = SamConfig::new(dir.path(), "samconfig.json").unwrap();
        let section = reopened.get_all(&["deploy"], "parameters", DEFAULT_ENV).unwrap();
        assert_eq!(section.get("stack_name"), Some(&json!("app")));
    }
}
