//! Error types for lanekit-runner.

/// Errors produced by tool resolution and process invocation.
///
/// Each variant carries a fixed message template; nothing here is retried
/// or logged, the error is raised straight to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The fastlane executable could not be found.
    #[error("{tool}: could not locate executable")]
    ToolNotFound { tool: &'static str },

    /// The process could not be spawned.
    #[error("{tool}: process was not started: {source}")]
    NotStarted {
        tool: &'static str,
        source: std::io::Error,
    },

    /// The process ran and returned a non-zero exit code.
    #[error("{tool}: process returned an error (exit code {code})")]
    ExitCode { tool: &'static str, code: i32 },

    /// The process was killed by a signal before producing an exit code.
    #[error("{tool}: process was terminated by a signal")]
    Terminated { tool: &'static str },

    /// fastlane tools only run on macOS hosts.
    #[error("use of fastlane tools requires macOS (host os is {os})")]
    UnsupportedHost { os: String },

    /// The working directory could not be determined.
    #[error("cannot determine working directory: {source}")]
    WorkingDir { source: std::io::Error },
}
