//! Output abstraction separating IO from command logic.
//!
//! Commands accept `&mut dyn Output` instead of printing directly, so the
//! same logic drives the CLI and the test harness.

mod cli;
mod test;

pub use cli::CliOutput;
pub use test::{OutputEntry, TestOutput};

/// Configuration for output behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress most output when true.
    pub quiet: bool,
    /// Enable debug/step output when true.
    pub verbose: bool,
}

impl OutputConfig {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }
}

/// Trait for abstracting output operations.
///
/// Implementors should respect `quiet` and `verbose` modes where appropriate.
pub trait Output {
    /// Warning to stderr. Always shown.
    fn warning(&mut self, msg: &str);

    /// Error to stderr. Always shown.
    fn error(&mut self, msg: &str);

    /// Intermediate step message. Only shown in verbose mode.
    fn step(&mut self, msg: &str);

    /// Final result message, the primary output of a command.
    /// Shown unless quiet.
    fn result(&mut self, msg: &str);
}
