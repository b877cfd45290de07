use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Resolution policy for keys whose shapes disagree between base and overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum OnConflict {
  PreferOverlay,
  Fail,
}

impl Display for OnConflict {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::PreferOverlay => write!(f, "preferOverlay"),
      Self::Fail => write!(f, "fail"),
    }
  }
}

#[derive(Debug, Default, Clone)]
pub struct ComposeOptions {
  pub on_conflict: Option<OnConflict>,
}

#[derive(Debug)]
pub struct NormalizedComposeOptions {
  pub on_conflict: OnConflict,
}
