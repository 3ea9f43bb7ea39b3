//! core::paths
//!
//! Centralized path resolution for the template tree and the target project.
//!
//! # Template resolution
//!
//! The bundled template ships next to the installed binary. Resolution order:
//!
//! 1. `CREATE_JTC_TEMPLATE_DIR` environment variable, when set (tests and
//!    packagers)
//! 2. `<directory of the running binary>/template`
//! 3. `<crate root>/template` (running from a build tree)
//!
//! The resolved path is a candidate only; [`crate::scaffold`] verifies it is
//! an existing directory before copying.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::types::ProjectName;

/// Environment variable that overrides the template root.
pub const TEMPLATE_DIR_ENV: &str = "CREATE_JTC_TEMPLATE_DIR";

/// Name of the template directory shipped next to the binary.
pub const TEMPLATE_DIR_NAME: &str = "template";

/// Resolve the template root for this invocation.
pub fn template_root() -> PathBuf {
    resolve_template_root(env::var_os(TEMPLATE_DIR_ENV), env::current_exe().ok())
}

/// Pure resolution, split out so it can be tested without touching the
/// process environment.
fn resolve_template_root(env_override: Option<OsString>, exe: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_override {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(exe) = exe {
        if let Some(dir) = exe.parent() {
            let bundled = dir.join(TEMPLATE_DIR_NAME);
            if bundled.is_dir() {
                return bundled;
            }
        }
    }

    // Build-tree fallback: the template committed in the crate root.
    Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME)
}

/// Compute the target project directory: `<cwd>/<name>`.
///
/// # Example
///
/// ```
/// use create_jtc::core::paths::target_dir;
/// use create_jtc::core::types::ProjectName;
/// use std::path::Path;
///
/// let name = ProjectName::new("my-app").unwrap();
/// assert_eq!(
///     target_dir(Path::new("/work"), &name),
///     Path::new("/work/my-app")
/// );
/// ```
pub fn target_dir(cwd: &Path, name: &ProjectName) -> PathBuf {
    cwd.join(name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins() {
        let root = resolve_template_root(
            Some(OsString::from("/opt/jtc/template")),
            Some(PathBuf::from("/usr/local/bin/create-jtc")),
        );
        assert_eq!(root, PathBuf::from("/opt/jtc/template"));
    }

    #[test]
    fn empty_env_override_is_ignored() {
        let root = resolve_template_root(Some(OsString::new()), None);
        assert_eq!(
            root,
            Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME)
        );
    }

    #[test]
    fn falls_back_to_build_tree_without_exe_adjacent_template() {
        // /nonexistent/bin has no template/ next to it.
        let root = resolve_template_root(None, Some(PathBuf::from("/nonexistent/bin/create-jtc")));
        assert_eq!(
            root,
            Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR_NAME)
        );
    }

    #[test]
    fn exe_adjacent_template_is_preferred_when_present() {
        let dir = tempfile::TempDir::new().unwrap();
        let bundled = dir.path().join(TEMPLATE_DIR_NAME);
        std::fs::create_dir(&bundled).unwrap();

        let root = resolve_template_root(None, Some(dir.path().join("create-jtc")));
        assert_eq!(root, bundled);
    }

    #[test]
    fn target_dir_joins_cwd_and_name() {
        let name = ProjectName::new("demo_1").unwrap();
        assert_eq!(
            target_dir(Path::new("/tmp/work"), &name),
            PathBuf::from("/tmp/work/demo_1")
        );
    }
}
