use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ConfigValue;

/// A plugin reference with opaque construction options, e.g.
/// `{ "name": "HtmlWebpackPlugin", "options": { "template": "./src/template.html" } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PluginDescriptor {
  pub name: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<ConfigValue>,
}

impl From<&str> for PluginDescriptor {
  fn from(value: &str) -> Self {
    Self { name: value.to_string(), options: None }
  }
}
