use packconf_common::{ComposeOptions, NormalizedComposeOptions, OnConflict};

/// Conflicts fail loudly unless the caller opts into overlay preference.
pub fn normalize_compose_options(raw_options: ComposeOptions) -> NormalizedComposeOptions {
  NormalizedComposeOptions { on_conflict: raw_options.on_conflict.unwrap_or(OnConflict::Fail) }
}
