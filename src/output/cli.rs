//! CLI output implementation.

use super::{Output, OutputConfig};

/// Writes directly to stdout/stderr in a git-like format:
/// lowercase `warning:`/`error:` prefixes on stderr, plain messages on
/// stdout, step messages only when verbose.
#[derive(Debug)]
pub struct CliOutput {
    config: OutputConfig,
}

impl CliOutput {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }
}

impl Output for CliOutput {
    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {msg}");
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {msg}");
    }

    fn step(&mut self, msg: &str) {
        if self.config.verbose && !self.config.quiet {
            println!("{msg}");
        }
    }

    fn result(&mut self, msg: &str) {
        if !self.config.quiet {
            println!("{msg}");
        }
    }
}
