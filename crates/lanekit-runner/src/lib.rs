//! Resolving and invoking the fastlane executable.

pub mod error;
pub mod platform;
pub mod run;
pub mod tool;

pub use error::RunnerError;
pub use platform::HostPlatform;
pub use run::Runner;
pub use tool::{resolve_tool, ToolSettings, TOOL_NAME};
