mod bundler_config;
mod compose_options;
mod config_value;

pub use crate::{
  bundler_config::{
    BundlerConfig,
    dev_server::{DevMiddlewareOptions, DevServerOptions, StaticOptions},
    entry::Entry,
    mode::Mode,
    module_rule::{LoaderUse, ModuleOptions, ModuleRule, RuleUse},
    output::OutputOptions,
    plugin::PluginDescriptor,
  },
  compose_options::{ComposeOptions, NormalizedComposeOptions, OnConflict},
  config_value::{ConfigMap, ConfigValue, ValueKind},
};
