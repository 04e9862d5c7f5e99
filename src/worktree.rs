//! Worktree creation with per-call backend selection.
//!
//! Two backends can create a worktree: the `coworktree` binary (preferred
//! when the user opts in and the binary is installed) and `git worktree add`
//! (always available). The choice is recomputed on every call from the
//! injected configuration and a fresh probe of the search path; nothing is
//! cached, since both the configuration and binary availability can differ
//! between calls.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::exec::ProcessRunner;
use crate::probe::ExecutableResolver;
use crate::{log_debug, log_error};

/// Canonical name of the coworktree binary on the search path.
pub const COWORKTREE_BIN: &str = "coworktree";

static SYSTEM_RESOLVER: crate::probe::SystemResolver = crate::probe::SystemResolver;
static SYSTEM_RUNNER: crate::exec::SystemRunner = crate::exec::SystemRunner;

/// Backend selected for one creation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// The coworktree binary, at the path the probe resolved.
    Coworktree(PathBuf),
    /// The git built-in `worktree add` subcommand.
    GitWorktree,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Coworktree(_) => write!(f, "coworktree"),
            Backend::GitWorktree => write!(f, "git worktree"),
        }
    }
}

/// Why a creation call failed.
#[derive(Debug, Clone)]
pub enum CreateFailure {
    /// The backend process could not be launched at all.
    Launch { error: String },
    /// The backend ran and exited non-zero.
    Exit { code: i32, stderr: String },
}

/// Result of one creation call.
///
/// Ordinary creation failures are data, not errors: the service reports them
/// through this value and leaves retry policy to the caller.
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    /// Which backend was selected and invoked.
    pub backend: Backend,
    /// `None` on success.
    pub failure: Option<CreateFailure>,
}

impl CreateOutcome {
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Creates git worktrees via the preferred available backend.
///
/// The configuration and the two capabilities (executable resolution,
/// process execution) are injected at construction. The service itself holds
/// no mutable state, so concurrent calls are safe with respect to it; any
/// repository-level locking is delegated to the backend tool.
pub struct WorktreeService<'a> {
    config: &'a Config,
    resolver: &'a dyn ExecutableResolver,
    runner: &'a dyn ProcessRunner,
}

impl<'a> WorktreeService<'a> {
    pub fn new(
        config: &'a Config,
        resolver: &'a dyn ExecutableResolver,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            config,
            resolver,
            runner,
        }
    }

    /// Service wired to the real search path and real child processes.
    pub fn with_system(config: &'a Config) -> Self {
        Self::new(config, &SYSTEM_RESOLVER, &SYSTEM_RUNNER)
    }

    /// Create a worktree for `branch` at `worktree_path` in `repo`.
    ///
    /// A single attempt: non-zero exits and launch failures come back as a
    /// failed outcome carrying diagnostics. Creating the same destination
    /// twice fails the second time; that backend behavior is passed through,
    /// not masked.
    pub fn create_worktree(&self, repo: &Path, branch: &str, worktree_path: &Path) -> CreateOutcome {
        let backend = self.select_backend();
        let argv = build_argv(&backend, repo, branch, worktree_path);
        log_debug!("running {backend} backend: {argv:?}");

        match self.runner.run(&argv, repo) {
            Err(err) => {
                // Launch failure, distinct from a backend reporting an error.
                log_error!("could not launch {backend} backend: {err}");
                CreateOutcome {
                    backend,
                    failure: Some(CreateFailure::Launch {
                        error: err.to_string(),
                    }),
                }
            }
            Ok(out) if out.success() => CreateOutcome {
                backend,
                failure: None,
            },
            Ok(out) => {
                log_error!(
                    "{backend} backend exited with status {}: {}",
                    out.exit_code,
                    out.stderr.trim()
                );
                CreateOutcome {
                    backend,
                    failure: Some(CreateFailure::Exit {
                        code: out.exit_code,
                        stderr: out.stderr,
                    }),
                }
            }
        }
    }

    fn select_backend(&self) -> Backend {
        // When the preference is off the resolver is never consulted; the
        // short-circuit is observable and tests assert it.
        if self.config.worktree.prefer_coworktree {
            if let Some(path) = self.resolver.resolve(COWORKTREE_BIN) {
                return Backend::Coworktree(path);
            }
            log_debug!("coworktree not found on PATH, falling back to git worktree");
        }
        Backend::GitWorktree
    }
}

/// Build the argument vector for the selected backend.
///
/// For coworktree, argv[0] is the resolved path and the flag layout follows
/// that tool's own CLI. For git, the `["git", "worktree"]` prefix is a
/// contract: the two tokens stay first, in order, with nothing between them.
fn build_argv(backend: &Backend, repo: &Path, branch: &str, worktree_path: &Path) -> Vec<String> {
    match backend {
        Backend::Coworktree(bin) => vec![
            bin.display().to_string(),
            "create".to_string(),
            "--repo".to_string(),
            repo.display().to_string(),
            "--branch".to_string(),
            branch.to_string(),
            worktree_path.display().to_string(),
        ],
        Backend::GitWorktree => vec![
            "git".to_string(),
            "worktree".to_string(),
            "add".to_string(),
            worktree_path.display().to_string(),
            branch.to_string(),
        ],
    }
}
