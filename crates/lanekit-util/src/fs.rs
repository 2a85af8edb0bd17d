//! Lexical path resolution.
//!
//! Relative paths in a configuration are resolved against the working
//! directory of the invocation, never against the process cwd. Resolution is
//! purely lexical: the paths do not need to exist, and symlinks are not
//! followed.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` and normalize the result.
///
/// Absolute paths pass through (normalized); relative paths are joined onto
/// `base` first. `base` is expected to be absolute.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Lexically normalize a path: drop `.` components and resolve `..` against
/// the preceding component. `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn absolutize_relative_joins_base() {
        let result = absolutize(Path::new("tools/fastlane"), Path::new("/Working"));
        assert_eq!(result, PathBuf::from("/Working/tools/fastlane"));
    }

    #[test]
    fn absolutize_strips_leading_dot() {
        let result = absolutize(Path::new("./cakeicon.png"), Path::new("/Working"));
        assert_eq!(result, PathBuf::from("/Working/cakeicon.png"));
    }

    #[test]
    fn absolutize_absolute_passes_through() {
        let result = absolutize(Path::new("/bin/tools/fastlane"), Path::new("/Working"));
        assert_eq!(result, PathBuf::from("/bin/tools/fastlane"));
    }

    #[test]
    fn absolutize_resolves_parent_components() {
        let result = absolutize(Path::new("../shared/key.p12"), Path::new("/Working/app"));
        assert_eq!(result, PathBuf::from("/Working/shared/key.p12"));
    }

    #[test]
    fn normalize_parent_at_root_stays_at_root() {
        assert_eq!(normalize(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn normalize_mixed_components() {
        assert_eq!(
            normalize(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
    }
}
