use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Development-only runtime options. Passed through to the dev server; the
/// composer only merges them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
  #[serde(rename = "static", skip_serializing_if = "Option::is_none")]
  pub static_dir: Option<StaticOptions>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub compress: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub port: Option<u16>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub dev_middleware: Option<DevMiddlewareOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StaticOptions {
  pub directory: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevMiddlewareOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub write_to_disk: Option<bool>,
}
