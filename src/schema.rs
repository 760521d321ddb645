//! JSON Schema generation for editor validation of config files.
//!
//! The schema is a derived artifact, not part of the runtime read/write path:
//! it is produced from a registry of command metadata so that every valid
//! environment -> command-key -> `parameters` -> option path is described.
//! Command keys in the schema are built with [`to_key`], the same function the
//! runtime uses, so the two can never disagree on key spelling.

use serde_json::{json, Value};

use crate::format::Document;
use crate::key::to_key;

/// Value shape of a single command option, mapped to a JSON Schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Number,
    Bool,
    List,
    Map,
}

impl OptionKind {
    fn type_schema(self) -> Value {
        match self {
            Self::String => json!({"type": "string"}),
            Self::Number => json!({"type": "number"}),
            Self::Bool => json!({"type": "boolean"}),
            Self::List => json!({"type": "array", "items": {"type": "string"}}),
            Self::Map => json!({"type": "object"}),
        }
    }
}

/// One configurable option of a command.
#[derive(Debug, Clone)]
pub struct OptionMetadata {
    pub name: String,
    pub help: String,
    pub kind: OptionKind,
}

impl OptionMetadata {
    pub fn new(name: &str, help: &str, kind: OptionKind) -> Self {
        Self {
            name: name.to_string(),
            help: help.to_string(),
            kind,
        }
    }
}

/// A registered command with its declared options.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub cmd_names: Vec<String>,
    pub description: String,
    pub options: Vec<OptionMetadata>,
}

impl CommandMetadata {
    pub fn new(cmd_names: &[&str], description: &str, options: Vec<OptionMetadata>) -> Self {
        Self {
            cmd_names: cmd_names.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
            options,
        }
    }

    /// The document key this command's values live under.
    pub fn key(&self) -> String {
        to_key(&self.cmd_names)
    }

    /// Human-readable command path, e.g. `local start api`.
    pub fn display_name(&self) -> String {
        self.cmd_names.join(" ")
    }
}

/// Build a draft-07 JSON Schema describing every valid section/key per
/// registered command.
pub fn generate_schema(commands: &[CommandMetadata]) -> Value {
    let mut command_properties = Document::new();
    for command in commands {
        command_properties.insert(command.key(), command_schema(command));
    }

    json!({
        "$schema": "http://json-schema.org/draft-07/schema",
        "title": "samconfig schema",
        "type": "object",
        "properties": {
            "version": {
                "title": "Config version",
                "type": "number",
                "default": 0.1
            }
        },
        "required": ["version"],
        "additionalProperties": false,
        "patternProperties": {
            "^.+$": {
                "title": "Environment",
                "type": "object",
                "properties": Value::Object(command_properties)
            }
        }
    })
}

fn command_schema(command: &CommandMetadata) -> Value {
    let mut option_properties = Document::new();
    for option in &command.options {
        let mut schema = option.kind.type_schema();
        if let Some(map) = schema.as_object_mut() {
            map.insert("title".to_string(), Value::String(option.name.clone()));
            map.insert("description".to_string(), Value::String(option.help.clone()));
        }
        option_properties.insert(option.name.clone(), schema);
    }

    json!({
        "title": format!("Parameters for the {} command", command.display_name()),
        "description": command.description,
        "type": "object",
        "properties": {
            "parameters": {
                "title": format!("{} command parameters", command.display_name()),
                "type": "object",
                "properties": Value::Object(option_properties)
            }
        }
    })
}

/// The built-in command registry covering the standard CLI surface.
pub fn default_commands() -> Vec<CommandMetadata> {
    use OptionKind::{Bool, List, Map, Number, String as Str};

    vec![
        CommandMetadata::new(
            &["init"],
            "Initialize a serverless application project.",
            vec![
                OptionMetadata::new("name", "Name of the project directory to create.", Str),
                OptionMetadata::new("runtime", "Runtime of the application.", Str),
                OptionMetadata::new("architecture", "Instruction set architecture.", Str),
                OptionMetadata::new("location", "Template location (folder, url, zip).", Str),
                OptionMetadata::new("package_type", "Package type of the application.", Str),
                OptionMetadata::new("app_template", "Identifier of the managed application template.", Str),
                OptionMetadata::new("no_input", "Disable prompting and fail on missing parameters.", Bool),
            ],
        ),
        CommandMetadata::new(
            &["build"],
            "Build application code and dependencies.",
            vec![
                OptionMetadata::new("template_file", "Path to the template file.", Str),
                OptionMetadata::new("base_dir", "Resolve relative paths from this directory.", Str),
                OptionMetadata::new("use_container", "Build inside a container image.", Bool),
                OptionMetadata::new("parallel", "Build functions and layers in parallel.", Bool),
                OptionMetadata::new("cached", "Reuse build artifacts when sources are unchanged.", Bool),
                OptionMetadata::new("manifest", "Path to a custom dependency manifest.", Str),
                OptionMetadata::new("skip_pull_image", "Skip pulling the latest build image.", Bool),
                OptionMetadata::new("parameter_overrides", "Template parameter overrides.", Str),
            ],
        ),
        CommandMetadata::new(
            &["deploy"],
            "Deploy the application to the cloud.",
            vec![
                OptionMetadata::new("stack_name", "Name of the stack to deploy to.", Str),
                OptionMetadata::new("s3_bucket", "Bucket for deployment artifacts.", Str),
                OptionMetadata::new("s3_prefix", "Key prefix for uploaded artifacts.", Str),
                OptionMetadata::new("region", "Target region.", Str),
                OptionMetadata::new("profile", "Credential profile to use.", Str),
                OptionMetadata::new("capabilities", "Capabilities to allow during stack creation.", List),
                OptionMetadata::new("confirm_changeset", "Prompt before applying the changeset.", Bool),
                OptionMetadata::new("fail_on_empty_changeset", "Fail when the changeset is empty.", Bool),
                OptionMetadata::new("resolve_s3", "Create a managed artifact bucket automatically.", Bool),
                OptionMetadata::new("parameter_overrides", "Template parameter overrides.", Str),
                OptionMetadata::new("template_parameters", "Structured template parameters.", Map),
                OptionMetadata::new("template_tags", "Structured stack tags.", Map),
                OptionMetadata::new("tags", "Legacy flattened stack tags.", Str),
            ],
        ),
        CommandMetadata::new(
            &["validate"],
            "Validate a template file.",
            vec![
                OptionMetadata::new("template_file", "Path to the template file.", Str),
                OptionMetadata::new("lint", "Run linting rules on the template.", Bool),
            ],
        ),
        CommandMetadata::new(
            &["package"],
            "Package application artifacts and upload them.",
            vec![
                OptionMetadata::new("template_file", "Path to the template file.", Str),
                OptionMetadata::new("output_template_file", "Where to write the packaged template.", Str),
                OptionMetadata::new("s3_bucket", "Bucket for packaged artifacts.", Str),
                OptionMetadata::new("image_repository", "Repository for container images.", Str),
                OptionMetadata::new("force_upload", "Upload artifacts even if unchanged.", Bool),
            ],
        ),
        CommandMetadata::new(
            &["delete"],
            "Delete a deployed stack.",
            vec![
                OptionMetadata::new("stack_name", "Name of the stack to delete.", Str),
                OptionMetadata::new("region", "Target region.", Str),
                OptionMetadata::new("no_prompts", "Run without interactive confirmation.", Bool),
            ],
        ),
        CommandMetadata::new(
            &["local", "invoke"],
            "Invoke a function locally once.",
            vec![
                OptionMetadata::new("template_file", "Path to the template file.", Str),
                OptionMetadata::new("event", "Path to the event payload file.", Str),
                OptionMetadata::new("env_vars", "Path to an environment variable override file.", Str),
                OptionMetadata::new("docker_network", "Container network to attach to.", Str),
                OptionMetadata::new("skip_pull_image", "Skip pulling the latest runtime image.", Bool),
            ],
        ),
        CommandMetadata::new(
            &["local", "start", "api"],
            "Run the API endpoints locally.",
            vec![
                OptionMetadata::new("port", "Port to listen on.", Number),
                OptionMetadata::new("host", "Host address to bind.", Str),
                OptionMetadata::new("template_file", "Path to the template file.", Str),
                OptionMetadata::new("warm_containers", "Container reuse strategy.", Str),
            ],
        ),
        CommandMetadata::new(
            &["local", "start", "lambda"],
            "Run a local function endpoint.",
            vec![
                OptionMetadata::new("port", "Port to listen on.", Number),
                OptionMetadata::new("host", "Host address to bind.", Str),
                OptionMetadata::new("template_file", "Path to the template file.", Str),
            ],
        ),
        CommandMetadata::new(
            &["logs"],
            "Fetch logs for deployed resources.",
            vec![
                OptionMetadata::new("name", "Name of the resource to fetch logs for.", Str),
                OptionMetadata::new("stack_name", "Stack the resource belongs to.", Str),
                OptionMetadata::new("tail", "Keep streaming new log events.", Bool),
                OptionMetadata::new("filter", "Filter pattern applied to log lines.", Str),
            ],
        ),
        CommandMetadata::new(
            &["sync"],
            "Sync local changes to the deployed stack.",
            vec![
                OptionMetadata::new("stack_name", "Name of the stack to sync.", Str),
                OptionMetadata::new("watch", "Watch sources and sync continuously.", Bool),
                OptionMetadata::new("code", "Sync code changes only.", Bool),
                OptionMetadata::new("dependency_layer", "Separate dependencies into a layer.", Bool),
                OptionMetadata::new("resource_id", "Restrict the sync to specific resources.", List),
            ],
        ),
    ]
}
