//! Executable probing on the host search path.

use std::path::PathBuf;

/// Capability to resolve an executable name to an absolute path.
///
/// Absence is a normal, first-class outcome, not a fault. Implementations
/// must not cache: availability can change between calls, and the worktree
/// service re-probes on every creation.
pub trait ExecutableResolver {
    /// Resolve `name` against the host executable search path.
    ///
    /// Returns the absolute path of the first match, or `None`.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Resolver backed by the `PATH` of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl ExecutableResolver for SystemResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;

    #[cfg(unix)]
    fn make_executable(path: &std::path::Path) {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }

    #[test]
    fn test_resolve_absent_binary() {
        let resolver = SystemResolver;
        assert_eq!(resolver.resolve("sprout-no-such-binary-72f1"), None);
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_resolve_finds_binary_on_path() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("sprout-probe-target");
        fs::write(&tool, "#!/bin/sh\nexit 0\n").unwrap();
        make_executable(&tool);

        let original_path = env::var_os("PATH").unwrap_or_default();
        let mut paths: Vec<_> = env::split_paths(&original_path).collect();
        paths.insert(0, dir.path().to_path_buf());
        env::set_var("PATH", env::join_paths(paths).unwrap());

        let resolved = SystemResolver.resolve("sprout-probe-target");

        env::set_var("PATH", original_path);

        let resolved = resolved.expect("binary should resolve while on PATH");
        assert!(resolved.is_absolute());
        assert_eq!(resolved.file_name().unwrap(), "sprout-probe-target");
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_resolve_is_uncached() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("sprout-transient-tool");
        fs::write(&tool, "#!/bin/sh\nexit 0\n").unwrap();
        make_executable(&tool);

        let original_path = env::var_os("PATH").unwrap_or_default();
        let mut paths: Vec<_> = env::split_paths(&original_path).collect();
        paths.insert(0, dir.path().to_path_buf());
        env::set_var("PATH", env::join_paths(paths).unwrap());

        let resolver = SystemResolver;
        let first = resolver.resolve("sprout-transient-tool");
        fs::remove_file(&tool).unwrap();
        let second = resolver.resolve("sprout-transient-tool");

        env::set_var("PATH", original_path);

        assert!(first.is_some());
        assert_eq!(second, None);
    }
}
