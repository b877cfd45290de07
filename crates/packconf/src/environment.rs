use packconf_common::{BundlerConfig, Mode};
use packconf_error::ComposeResult;

use crate::composer::ConfigComposer;

/// A common configuration with per-environment overlays: the
/// `webpack.common.js` / `webpack.dev.js` / `webpack.prod.js` trio as data.
#[derive(Debug, Default, Clone)]
pub struct EnvironmentSet {
  pub common: BundlerConfig,
  pub development: BundlerConfig,
  pub production: BundlerConfig,
}

impl EnvironmentSet {
  /// Resolves the configuration for one environment. The merged config
  /// carries the requested mode unless the overlay set one explicitly.
  pub fn resolve(&self, composer: &ConfigComposer, mode: Mode) -> ComposeResult<BundlerConfig> {
    let overlay = match mode {
      Mode::Development => &self.development,
      Mode::Production => &self.production,
    };
    let mut merged = composer.compose_config(&self.common, overlay)?;
    if merged.mode.is_none() {
      merged.mode = Some(mode);
    }
    Ok(merged)
  }
}
