//! Locating the fastlane executable.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lanekit_args::Environment;

use crate::error::RunnerError;

/// Name of the external tool, used in every error message.
pub const TOOL_NAME: &str = "fastlane";

/// Invocation settings shared by all subcommands: where the tool lives,
/// where it runs, and what extra environment it gets.
#[derive(Debug, Clone, Default)]
pub struct ToolSettings {
    /// Explicit path to the executable. Relative paths are resolved against
    /// the working directory. When unset, `PATH` is searched.
    pub tool_path: Option<PathBuf>,
    /// Working directory for the process and for path absolutization.
    pub working_directory: Option<PathBuf>,
    /// Extra environment variables for the process.
    pub environment: BTreeMap<String, String>,
}

/// Resolve the fastlane executable for the given settings.
///
/// An explicit `tool_path` wins; it is absolutized against the working
/// directory and must exist. Otherwise the directories on `PATH` are
/// searched in order for an executable named `fastlane`.
///
/// # Errors
/// Returns [`RunnerError::ToolNotFound`] if no executable can be located.
pub fn resolve_tool(settings: &ToolSettings, env: &Environment) -> Result<PathBuf, RunnerError> {
    if let Some(tool_path) = &settings.tool_path {
        let absolute = env.absolute(tool_path);
        if absolute.is_file() {
            return Ok(absolute);
        }
        return Err(RunnerError::ToolNotFound { tool: TOOL_NAME });
    }

    let path_var = std::env::var("PATH").unwrap_or_default();
    search_path(TOOL_NAME, &path_var).ok_or(RunnerError::ToolNotFound { tool: TOOL_NAME })
}

/// Search the directories of a `PATH`-style value for an executable.
fn search_path(name: &str, path_value: &str) -> Option<PathBuf> {
    std::env::split_paths(path_value)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let Ok(metadata) = std::fs::metadata(path) else {
            return false;
        };
        metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn fake_tool(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh\nexit 0").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        path
    }

    #[test]
    fn explicit_tool_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), "fastlane");
        let settings = ToolSettings {
            tool_path: Some(tool.clone()),
            ..ToolSettings::default()
        };
        let env = Environment::new("/Working");
        assert_eq!(resolve_tool(&settings, &env).unwrap(), tool);
    }

    #[test]
    fn relative_tool_path_is_absolutized() {
        let dir = tempfile::tempdir().unwrap();
        let tools_dir = dir.path().join("tools");
        std::fs::create_dir_all(&tools_dir).unwrap();
        fake_tool(&tools_dir, "fastlane");
        let settings = ToolSettings {
            tool_path: Some(PathBuf::from("./tools/fastlane")),
            working_directory: Some(dir.path().to_path_buf()),
            ..ToolSettings::default()
        };
        let env = Environment::new(dir.path());
        let resolved = resolve_tool(&settings, &env).unwrap();
        assert_eq!(resolved, dir.path().join("tools/fastlane"));
    }

    #[test]
    fn missing_explicit_tool_path_is_tool_not_found() {
        let settings = ToolSettings {
            tool_path: Some(PathBuf::from("/no/such/fastlane")),
            ..ToolSettings::default()
        };
        let env = Environment::new("/Working");
        let error = resolve_tool(&settings, &env).unwrap_err();
        assert_eq!(error.to_string(), "fastlane: could not locate executable");
    }

    #[test]
    fn search_path_finds_an_executable() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), "fastlane");
        let path_value = dir.path().display().to_string();
        assert_eq!(search_path("fastlane", &path_value), Some(tool));
    }

    #[test]
    fn search_path_skips_non_executables() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fastlane"), "not a script").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(
                dir.path().join("fastlane"),
                std::fs::Permissions::from_mode(0o644),
            )
            .unwrap();
            let path_value = dir.path().display().to_string();
            assert_eq!(search_path("fastlane", &path_value), None);
        }
    }

    #[test]
    fn search_path_empty_is_none() {
        assert_eq!(search_path("fastlane", ""), None);
    }
}
