//! Child process execution with captured output.

use std::io;
use std::path::Path;
use std::process::Command;

/// Exit code reported when the child was terminated without one (e.g. by a
/// signal).
pub const UNKNOWN_EXIT_CODE: i32 = -1;

/// Captured outcome of a single child process run.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Capability to execute an argument vector as a child process.
///
/// The vector is passed to the operating system as discrete arguments; no
/// shell is involved, so no quoting or injection ambiguity exists. The
/// repository the command operates on is supplied as the explicit `cwd`
/// argument of the invocation — implementations must not change the parent
/// process working directory.
///
/// `Err` means the process could not be launched at all (missing or
/// non-executable binary, permissions). A launched process that exits
/// non-zero is an `Ok` with a non-zero `exit_code`.
pub trait ProcessRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> io::Result<ExecOutput>;
}

/// Runner that spawns real child processes, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> io::Result<ExecOutput> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty argument vector")
        })?;

        let output = Command::new(program).args(args).current_dir(cwd).output()?;

        Ok(ExecOutput {
            exit_code: output.status.code().unwrap_or(UNKNOWN_EXIT_CODE),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
