use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output block: filename patterns and emit locations. Patterns such as
/// `main.[hash].js` are opaque to the composer; the bundler expands them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub filename: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub public_path: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub asset_module_filename: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub hot_update_chunk_filename: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub hot_update_main_filename: Option<String>,
}
