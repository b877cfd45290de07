use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping used throughout the configuration tree. Key
/// order is significant: merged output keeps base keys first.
pub type ConfigMap = IndexMap<String, ConfigValue, BuildHasherDefault<FxHasher>>;

/// A configuration value as an external bundler sees it. Unknown fields stay
/// representable; the composer never interprets leaf values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
  Null,
  Bool(bool),
  Integer(i64),
  Float(f64),
  String(String),
  Sequence(Vec<ConfigValue>),
  Mapping(ConfigMap),
}

/// Shape classifier used in merge diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
  Null,
  Bool,
  Integer,
  Float,
  String,
  Sequence,
  Mapping,
}

impl ValueKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Null => "null",
      Self::Bool => "a boolean",
      Self::Integer => "an integer",
      Self::Float => "a float",
      Self::String => "a string",
      Self::Sequence => "a sequence",
      Self::Mapping => "a mapping",
    }
  }
}

impl ConfigValue {
  pub fn kind(&self) -> ValueKind {
    match self {
      Self::Null => ValueKind::Null,
      Self::Bool(_) => ValueKind::Bool,
      Self::Integer(_) => ValueKind::Integer,
      Self::Float(_) => ValueKind::Float,
      Self::String(_) => ValueKind::String,
      Self::Sequence(_) => ValueKind::Sequence,
      Self::Mapping(_) => ValueKind::Mapping,
    }
  }

  /// Mappings and sequences merge structurally; everything else is a leaf.
  #[inline]
  pub fn is_container(&self) -> bool {
    matches!(self, Self::Sequence(_) | Self::Mapping(_))
  }

  pub fn as_mapping(&self) -> Option<&ConfigMap> {
    match self {
      Self::Mapping(map) => Some(map),
      _ => None,
    }
  }

  pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
    match self {
      Self::Sequence(items) => Some(items),
      _ => None,
    }
  }

  /// Looks up a nested value by dotted key path, e.g. `output.filename`.
  pub fn get(&self, path: &str) -> Option<&ConfigValue> {
    path.split('.').try_fold(self, |value, key| value.as_mapping()?.get(key))
  }
}

impl From<&str> for ConfigValue {
  fn from(value: &str) -> Self {
    Self::String(value.to_string())
  }
}

impl From<String> for ConfigValue {
  fn from(value: String) -> Self {
    Self::String(value)
  }
}

impl From<bool> for ConfigValue {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl From<i64> for ConfigValue {
  fn from(value: i64) -> Self {
    Self::Integer(value)
  }
}

impl From<Vec<ConfigValue>> for ConfigValue {
  fn from(value: Vec<ConfigValue>) -> Self {
    Self::Sequence(value)
  }
}

impl From<ConfigMap> for ConfigValue {
  fn from(value: ConfigMap) -> Self {
    Self::Mapping(value)
  }
}

impl From<serde_json::Value> for ConfigValue {
  fn from(value: serde_json::Value) -> Self {
    match value {
      serde_json::Value::Null => Self::Null,
      serde_json::Value::Bool(value) => Self::Bool(value),
      serde_json::Value::Number(number) => number
        .as_i64()
        .map_or_else(|| Self::Float(number.as_f64().unwrap_or_default()), Self::Integer),
      serde_json::Value::String(value) => Self::String(value),
      serde_json::Value::Array(items) => Self::Sequence(items.into_iter().map(Into::into).collect()),
      serde_json::Value::Object(map) => {
        Self::Mapping(map.into_iter().map(|(key, value)| (key, value.into())).collect())
      }
    }
  }
}

impl From<ConfigValue> for serde_json::Value {
  fn from(value: ConfigValue) -> Self {
    match value {
      ConfigValue::Null => Self::Null,
      ConfigValue::Bool(value) => Self::Bool(value),
      ConfigValue::Integer(value) => Self::from(value),
      ConfigValue::Float(value) => serde_json::Number::from_f64(value).map_or(Self::Null, Self::Number),
      ConfigValue::String(value) => Self::String(value),
      ConfigValue::Sequence(items) => Self::Array(items.into_iter().map(Into::into).collect()),
      ConfigValue::Mapping(map) => {
        Self::Object(map.into_iter().map(|(key, value)| (key, value.into())).collect())
      }
    }
  }
}

impl JsonSchema for ConfigValue {
  fn schema_name() -> String {
    "ConfigValue".to_string()
  }

  fn json_schema(gen: &mut SchemaGenerator) -> Schema {
    gen.subschema_for::<serde_json::Value>()
  }
}
