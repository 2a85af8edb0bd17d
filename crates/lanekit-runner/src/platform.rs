//! Host platform gate.
//!
//! fastlane depends on Xcode tooling and only works on macOS. The gate is an
//! explicit precondition on runner construction, with its own error variant,
//! against an injected descriptor rather than ambient globals so it stays
//! testable on any host.

use crate::error::RunnerError;

/// Descriptor of the operating system the runner executes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    /// OS identifier in `std::env::consts::OS` form, e.g. `macos`, `linux`.
    pub os: String,
}

impl HostPlatform {
    /// The platform this process is running on.
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_owned(),
        }
    }

    /// A macOS descriptor, mostly for tests and dry runs.
    pub fn macos() -> Self {
        Self {
            os: "macos".to_owned(),
        }
    }

    pub fn is_macos(&self) -> bool {
        self.os == "macos"
    }

    /// Fail unless this host can run fastlane.
    ///
    /// # Errors
    /// Returns [`RunnerError::UnsupportedHost`] on any non-macOS host.
    pub fn ensure_supported(&self) -> Result<(), RunnerError> {
        if self.is_macos() {
            Ok(())
        } else {
            Err(RunnerError::UnsupportedHost {
                os: self.os.clone(),
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn macos_passes_the_gate() {
        assert!(HostPlatform::macos().ensure_supported().is_ok());
    }

    #[test]
    fn other_hosts_fail_with_the_dedicated_variant() {
        let host = HostPlatform {
            os: "linux".to_owned(),
        };
        let error = host.ensure_supported().unwrap_err();
        assert!(matches!(error, RunnerError::UnsupportedHost { .. }));
        assert!(error.to_string().contains("requires macOS"));
        assert!(error.to_string().contains("linux"));
    }
}
