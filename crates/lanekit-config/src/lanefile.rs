//! The `lanekit.toml` project file.
//!
//! One optional section per fastlane subcommand, deserializing straight into
//! the configuration structs from `lanekit-args`, plus a `[tool]` section
//! for invocation settings. Requesting a subcommand whose section is absent
//! is the "missing configuration" failure — it fires before any token is
//! produced or any process work happens.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lanekit_args::{DeliverConfig, MatchConfig, PemConfig, PilotConfig, SupplyConfig};

/// Invocation settings shared by all subcommands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolSection {
    /// Explicit path to the fastlane executable, relative paths resolved
    /// against the working directory.
    pub tool_path: Option<PathBuf>,
    /// Working directory for the invocation and for path absolutization.
    pub working_directory: Option<PathBuf>,
    /// Extra environment variables for the fastlane process. This is where
    /// real secrets belong (`FASTLANE_PASSWORD`, `MATCH_PASSWORD`, ...).
    pub environment: BTreeMap<String, String>,
}

/// A parsed `lanekit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lanefile {
    pub tool: ToolSection,
    pub r#match: Option<MatchConfig>,
    pub pem: Option<PemConfig>,
    pub pilot: Option<PilotConfig>,
    pub deliver: Option<DeliverConfig>,
    pub supply: Option<SupplyConfig>,
}

impl Lanefile {
    /// Read and parse a `lanekit.toml` from the given path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Parse from an already-read string; `path` is only used in messages.
    ///
    /// # Errors
    /// Returns an error if the content is not valid TOML for a lanefile.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// The `[match]` section.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingSection`] if the section is absent.
    pub fn match_section(&self) -> Result<&MatchConfig, ConfigError> {
        self.r#match.as_ref().ok_or(ConfigError::MissingSection {
            section: "match",
        })
    }

    /// The `[pem]` section.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingSection`] if the section is absent.
    pub fn pem_section(&self) -> Result<&PemConfig, ConfigError> {
        self.pem
            .as_ref()
            .ok_or(ConfigError::MissingSection { section: "pem" })
    }

    /// The `[pilot]` section.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingSection`] if the section is absent.
    pub fn pilot_section(&self) -> Result<&PilotConfig, ConfigError> {
        self.pilot
            .as_ref()
            .ok_or(ConfigError::MissingSection { section: "pilot" })
    }

    /// The `[deliver]` section.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingSection`] if the section is absent.
    pub fn deliver_section(&self) -> Result<&DeliverConfig, ConfigError> {
        self.deliver.as_ref().ok_or(ConfigError::MissingSection {
            section: "deliver",
        })
    }

    /// The `[supply]` section.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingSection`] if the section is absent.
    pub fn supply_section(&self) -> Result<&SupplyConfig, ConfigError> {
        self.supply.as_ref().ok_or(ConfigError::MissingSection {
            section: "supply",
        })
    }
}

/// Errors from loading a lanefile.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file cannot be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The file is not valid TOML for a lanefile.
    #[error("invalid lanekit.toml at {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    /// A subcommand was requested without its configuration section.
    #[error("missing configuration: no [{section}] section in lanekit.toml")]
    MissingSection { section: &'static str },
}
