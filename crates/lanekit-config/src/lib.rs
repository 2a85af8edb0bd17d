//! `lanekit.toml` loading.

pub mod lanefile;

pub use lanefile::{ConfigError, Lanefile, ToolSection};
