//! Conversions between the neutral document representation
//! (`serde_json::Value`) and each format library's native value tree.
//!
//! Every file manager parses into its own library's type and immediately
//! normalizes to `serde_json::Value`, so the rest of the crate never sees a
//! format-specific tree. The conversions here are shape-preserving: mappings
//! stay in encounter order, scalars keep their types.
//!
//! Two format-specific wrinkles:
//!
//! - TOML has no null. `json_to_toml` drops null-valued entries (and null
//!   array elements) rather than inventing a placeholder.
//! - TOML datetimes and YAML tagged values are normalized to strings / their
//!   inner value; the document model has no use for either.

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use toml::Value as TomlValue;

/// Normalize a parsed TOML tree into the neutral representation.
pub fn toml_to_json(value: TomlValue) -> JsonValue {
    match value {
        TomlValue::String(s) => JsonValue::String(s),
        TomlValue::Integer(i) => JsonValue::Number(i.into()),
        TomlValue::Float(f) => serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        TomlValue::Boolean(b) => JsonValue::Bool(b),
        TomlValue::Datetime(dt) => JsonValue::String(dt.to_string()),
        TomlValue::Array(items) => {
            JsonValue::Array(items.into_iter().map(toml_to_json).collect())
        }
        TomlValue::Table(table) => {
            let mut map = serde_json::Map::new();
            for (k, v) in table {
                map.insert(k, toml_to_json(v));
            }
            JsonValue::Object(map)
        }
    }
}

/// Render a neutral value as a TOML tree. Returns `None` for null (TOML
/// cannot represent it); containers drop their null entries.
pub fn json_to_toml(value: &JsonValue) -> Option<TomlValue> {
    match value {
        JsonValue::Null => None,
        JsonValue::Bool(b) => Some(TomlValue::Boolean(*b)),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(TomlValue::Integer(i))
            } else {
                n.as_f64().map(TomlValue::Float)
            }
        }
        JsonValue::String(s) => Some(TomlValue::String(s.clone())),
        JsonValue::Array(items) => Some(TomlValue::Array(
            items.iter().filter_map(json_to_toml).collect(),
        )),
        JsonValue::Object(map) => {
            let mut table = toml::map::Map::new();
            for (k, v) in map {
                if let Some(tv) = json_to_toml(v) {
                    table.insert(k.clone(), tv);
                }
            }
            Some(TomlValue::Table(table))
        }
    }
}

/// Normalize a parsed YAML tree into the neutral representation.
///
/// Non-string mapping keys (YAML allows numbers and bools) are stringified;
/// the document model's keys are always strings.
pub fn yaml_to_json(value: YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::Number(i.into())
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null)
            }
        }
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(items) => {
            JsonValue::Array(items.into_iter().map(yaml_to_json).collect())
        }
        YamlValue::Mapping(mapping) => {
            let mut map = serde_json::Map::new();
            for (k, v) in mapping {
                let key = match k {
                    YamlValue::String(s) => s,
                    YamlValue::Bool(b) => b.to_string(),
                    YamlValue::Number(n) => n.to_string(),
                    _ => continue,
                };
                map.insert(key, yaml_to_json(v));
            }
            JsonValue::Object(map)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Render a neutral value as a YAML tree.
pub fn json_to_yaml(value: &JsonValue) -> YamlValue {
    match value {
        JsonValue::Null => YamlValue::Null,
        JsonValue::Bool(b) => YamlValue::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                YamlValue::Number(i.into())
            } else {
                n.as_f64()
                    .map(|f| YamlValue::Number(f.into()))
                    .unwrap_or(YamlValue::Null)
            }
        }
        JsonValue::String(s) => YamlValue::String(s.clone()),
        JsonValue::Array(items) => {
            YamlValue::Sequence(items.iter().map(json_to_yaml).collect())
        }
        JsonValue::Object(map) => {
            let mut mapping = serde_yaml::Mapping::new();
            for (k, v) in map {
                mapping.insert(YamlValue::String(k.clone()), json_to_yaml(v));
            }
            YamlValue::Mapping(mapping)
        }
    }
}
