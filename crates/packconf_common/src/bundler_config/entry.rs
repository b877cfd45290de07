use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Entry declaration: a single path, or a map of entry names to paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Entry {
  Single(String),
  Named(IndexMap<String, String>),
}

impl From<&str> for Entry {
  fn from(value: &str) -> Self {
    Self::Single(value.to_string())
  }
}

impl From<String> for Entry {
  fn from(value: String) -> Self {
    Self::Single(value)
  }
}
