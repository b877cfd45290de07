use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ConfigValue;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModuleOptions {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub rules: Vec<ModuleRule>,
}

/// A match/transform directive. `test` and `exclude` carry the bundler's
/// matcher source text verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRule {
  pub test: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub exclude: Option<String>,

  #[serde(rename = "use", default, skip_serializing_if = "RuleUse::is_empty")]
  pub uses: RuleUse,
}

/// The `use` field accepts one loader or an ordered loader list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleUse {
  Many(Vec<LoaderUse>),
  One(LoaderUse),
}

impl RuleUse {
  pub fn is_empty(&self) -> bool {
    match self {
      Self::Many(loaders) => loaders.is_empty(),
      Self::One(_) => false,
    }
  }

  /// Flattens to the ordered loader list the bundler applies right-to-left.
  pub fn loaders(&self) -> &[LoaderUse] {
    match self {
      Self::Many(loaders) => loaders,
      Self::One(loader) => std::slice::from_ref(loader),
    }
  }
}

impl Default for RuleUse {
  fn default() -> Self {
    Self::Many(Vec::new())
  }
}

/// A loader reference: a bare name, or a descriptor with loader options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum LoaderUse {
  Name(String),
  Descriptor {
    loader: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<ConfigValue>,
  },
}

impl LoaderUse {
  pub fn loader(&self) -> &str {
    match self {
      Self::Name(name) => name,
      Self::Descriptor { loader, .. } => loader,
    }
  }
}

impl From<&str> for LoaderUse {
  fn from(value: &str) -> Self {
    Self::Name(value.to_string())
  }
}
