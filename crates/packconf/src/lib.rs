mod composer;
mod environment;
mod merge;
mod utils;

pub use crate::{composer::ConfigComposer, environment::EnvironmentSet, merge::merge};
pub use packconf_common::*;
pub use packconf_error::{ComposeError, ComposeResult};
