pub mod dev_server;
pub mod entry;
pub mod mode;
pub mod module_rule;
pub mod output;
pub mod plugin;

use packconf_error::ComposeResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
  ConfigValue, DevServerOptions, Entry, Mode, ModuleOptions, OutputOptions, PluginDescriptor,
};

/// Declarative bundler configuration. Every field is optional so the same
/// type serves both a full base configuration and a sparse overlay.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mode: Option<Mode>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub target: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub entry: Option<Entry>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub output: Option<OutputOptions>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub module: Option<ModuleOptions>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub plugins: Option<Vec<PluginDescriptor>>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub dev_server: Option<DevServerOptions>,
}

impl BundlerConfig {
  /// Lowers to the generic value tree. `None` fields vanish, so an overlay
  /// lowers to a sparse mapping.
  pub fn to_value(&self) -> ComposeResult<ConfigValue> {
    Ok(serde_json::to_value(self)?.into())
  }

  pub fn from_value(value: ConfigValue) -> ComposeResult<Self> {
    Ok(serde_json::from_value(value.into())?)
  }
}
