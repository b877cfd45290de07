use packconf_common::{
  BundlerConfig, ComposeOptions, ConfigValue, NormalizedComposeOptions, OnConflict,
};
use packconf_error::ComposeResult;

use crate::{merge::merge_values, utils::normalize_options::normalize_compose_options};

/// Combines a base configuration with environment overlays. Stateless apart
/// from the normalized options; every call is independent.
pub struct ConfigComposer {
  options: NormalizedComposeOptions,
}

impl ConfigComposer {
  pub fn new(options: ComposeOptions) -> Self {
    Self { options: normalize_compose_options(options) }
  }

  pub fn on_conflict(&self) -> OnConflict {
    self.options.on_conflict
  }

  /// Merges one overlay onto a base value.
  pub fn compose(&self, base: &ConfigValue, overlay: &ConfigValue) -> ComposeResult<ConfigValue> {
    tracing::trace!(on_conflict = %self.options.on_conflict, "composing configuration");
    merge_values(base, overlay, self.options.on_conflict, &mut Vec::new())
  }

  /// Folds several overlays onto a base, left to right. Later overlays win
  /// at the leaves, as in a chain of binary merges.
  pub fn compose_all(
    &self,
    base: &ConfigValue,
    overlays: &[ConfigValue],
  ) -> ComposeResult<ConfigValue> {
    overlays.iter().try_fold(base.clone(), |merged, overlay| self.compose(&merged, overlay))
  }

  /// Typed composition: lowers both configs to value trees, merges, and
  /// lifts the result back.
  pub fn compose_config(
    &self,
    base: &BundlerConfig,
    overlay: &BundlerConfig,
  ) -> ComposeResult<BundlerConfig> {
    let merged = self.compose(&base.to_value()?, &overlay.to_value()?)?;
    BundlerConfig::from_value(merged)
  }
}

impl Default for ConfigComposer {
  fn default() -> Self {
    Self::new(ComposeOptions::default())
  }
}
