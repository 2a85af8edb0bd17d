//! `fastlane update_fastlane` — self-update of the toolchain.

use serde::{Deserialize, Serialize};

use crate::builder::ArgumentList;
use crate::env::Environment;
use crate::LaneCommand;

/// Configuration for the self-update subcommand. It carries no serialized
/// fields; the invocation is always the single `update_fastlane` token.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateConfig {}

impl LaneCommand for UpdateConfig {
    fn args(&self, _env: &Environment) -> ArgumentList {
        ArgumentList::new("update_fastlane")
    }
}
