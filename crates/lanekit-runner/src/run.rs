//! Serialize-and-invoke.

use std::process::Command;

use lanekit_args::{Environment, LaneCommand};

use crate::error::RunnerError;
use crate::platform::HostPlatform;
use crate::tool::{resolve_tool, ToolSettings, TOOL_NAME};

/// Invokes fastlane with the tokens a [`LaneCommand`] serializes to.
///
/// Construction applies the host-platform gate; running resolves the
/// executable, applies the working directory and environment overrides, and
/// maps the outcome onto the error taxonomy. One configuration maps to one
/// synchronous invocation; nothing is retried.
#[derive(Debug)]
pub struct Runner {
    settings: ToolSettings,
    env: Environment,
}

impl Runner {
    /// Create a runner for the given settings on the given host.
    ///
    /// # Errors
    /// Returns [`RunnerError::UnsupportedHost`] on a non-macOS host, or
    /// [`RunnerError::WorkingDir`] if no working directory is configured and
    /// the process cwd cannot be determined.
    pub fn new(settings: ToolSettings, host: &HostPlatform) -> Result<Self, RunnerError> {
        host.ensure_supported()?;
        let working_directory = match &settings.working_directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|source| RunnerError::WorkingDir { source })?,
        };
        Ok(Self {
            settings,
            env: Environment::new(working_directory),
        })
    }

    /// The directory context paths are absolutized against.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Serialize the command and run fastlane to completion.
    ///
    /// # Errors
    /// Returns [`RunnerError::ToolNotFound`] if the executable cannot be
    /// located, [`RunnerError::NotStarted`] if it cannot be spawned,
    /// [`RunnerError::ExitCode`] for a non-zero exit, and
    /// [`RunnerError::Terminated`] if the process dies to a signal.
    pub fn run(&self, command: &dyn LaneCommand) -> Result<(), RunnerError> {
        let args = command.args(&self.env);
        let tool = resolve_tool(&self.settings, &self.env)?;

        let mut process = Command::new(&tool);
        process
            .args(args.tokens())
            .current_dir(self.env.working_directory());
        for (key, value) in &self.settings.environment {
            process.env(key, value);
        }

        let status = process.status().map_err(|source| RunnerError::NotStarted {
            tool: TOOL_NAME,
            source,
        })?;

        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(RunnerError::ExitCode {
                tool: TOOL_NAME,
                code,
            }),
            None => Err(RunnerError::Terminated { tool: TOOL_NAME }),
        }
    }
}
