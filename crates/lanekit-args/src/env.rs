//! Working-directory context used to absolutize path-typed fields.

use std::path::{Path, PathBuf};

/// The directory context an invocation runs in.
///
/// Serializers consult this for exactly one thing: turning relative path
/// fields into absolute ones before emission. It is passed explicitly to
/// every serialization call; there is no ambient shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    working_directory: PathBuf,
}

impl Environment {
    /// Create a context rooted at the given working directory.
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self {
            working_directory: working_directory.into(),
        }
    }

    /// Create a context rooted at the process working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn current() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// The working directory this context resolves against.
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Resolve a path field to an absolute, lexically normalized path.
    pub fn absolute(&self, path: &Path) -> PathBuf {
        lanekit_util::fs::absolutize(path, &self.working_directory)
    }

    /// Resolve a path field and render it for emission.
    pub(crate) fn absolute_str(&self, path: &Path) -> String {
        self.absolute(path).display().to_string()
    }
}
