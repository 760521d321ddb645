//! Layered, multi-format project configuration for serverless CLI workflows.
//! Bind a file, `get`/`put` values by command, and go.
//!
//! Samconfig persists the defaults a CLI learns during interactive flows —
//! stack names, regions, ports, template parameters — into a single project
//! file (`samconfig.toml` by default) and resolves them back with a defined
//! precedence. The same document works in TOML, YAML, or JSON; the format is
//! picked from the filename extension.
//!
//! ```ignore
//! let mut config = SamConfig::with_default_name(project_dir)?;
//! config.put(&["deploy"], "parameters", "stack_name", json!("my-app"), DEFAULT_ENV)?;
//! config.flush()?;
//!
//! let section = config.get_all(&["deploy"], "parameters", DEFAULT_ENV)?;
//! ```
//!
//! # Document layout
//!
//! Values are addressed by environment, command key, and section:
//!
//! ```toml
//! version = 0.1
//!
//! [default.deploy.parameters]
//! stack_name = "my-app"
//!
//! [default.api_start_local.parameters]
//! port = 5401
//!
//! [staging.deploy.parameters]
//! stack_name = "my-app-staging"
//! ```
//!
//! - **Environment** — a named profile (`default` unless the user selects
//!   another), so one file can hold several parameter sets per command.
//! - **Command key** — derived from the command path by [`to_key`]: segments
//!   are normalized (`-` and spaces become `_`), reversed, and joined with
//!   `_`, so `sam local start api` stores under `api_start_local`. The
//!   reversal is part of the on-disk format; files written years ago must
//!   keep resolving.
//! - **Section** — a sub-grouping within a command, almost always
//!   `parameters`.
//!
//! # Global fallback
//!
//! The reserved `global` command key holds values shared by every command in
//! the same environment. Reads merge the global section under the
//! command-specific one (the specific value wins), and writes deduplicate:
//! putting a value that already matches the global entry is suppressed so the
//! single global copy stays the source of truth.
//!
//! # Template parameters and tags
//!
//! [`SamConfig::get_template_parameters`] and
//! [`SamConfig::get_template_tags`] are logical views over the `parameters`
//! section with a two-schema history. The structured mappings
//! (`template_parameters`, `template_tags`) win when present and non-empty;
//! otherwise the legacy flattened strings (`parameter_overrides`, `tags`) are
//! parsed with shell-style tokenization. Both views resolve through one code
//! path so their precedence can never drift apart.
//!
//! # Parameter overrides
//!
//! The [`params`] module turns a raw `--parameter-overrides` string into
//! structured data. A token is either a direct `Key=Value` assignment (the
//! value may be quoted to contain spaces) or a `file://` reference to a
//! `.json`, `.yaml`/`.yml`, or `.env` file whose entries are merged in.
//! `$VAR`/`${VAR}` references in paths and string values expand against the
//! process environment; unresolvable references stay literal.
//!
//! # Schema generation
//!
//! The [`schema`] module emits a draft-07 JSON Schema from a registry of
//! command metadata, describing every valid environment/command/section/key
//! path for editor validation. It is a derived artifact and takes no part in
//! the runtime read/write path.
//!
//! # Error handling
//!
//! All fallible operations return [`ConfigError`]. A missing config file is
//! not an error (first runs start from an empty document), but a file that
//! exists and does not parse, a document without a numeric `version`, and a
//! broken `file://` reference all surface with the offending path so users
//! can fix hand-edited files.

pub mod error;
pub mod params;
pub mod schema;

mod config;
mod convert;
mod envfile;
mod expand;
mod format;
mod key;
mod managers;

pub use config::{
    SamConfig, DEFAULT_CONFIG_FILE_NAME, DEFAULT_CONFIG_VERSION, DEFAULT_ENV,
    DEFAULT_GLOBAL_CMD_KEY, VERSION_KEY,
};
pub use error::ConfigError;
pub use expand::{expand, expand_with};
pub use format::{manager_for, Document, FileManager, Format, COMMENT_KEY};
pub use key::to_key;
pub use managers::{JsonFileManager, TomlFileManager, YamlFileManager};
