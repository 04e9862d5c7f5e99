//! Test output implementation capturing entries for assertions.

use super::{Output, OutputConfig};

/// A single output entry captured during testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
    Warning(String),
    Error(String),
    Step(String),
    Result(String),
}

/// Captures all output as structured data.
#[derive(Debug, Default)]
pub struct TestOutput {
    config: OutputConfig,
    entries: Vec<OutputEntry>,
}

impl TestOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OutputConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> OutputConfig {
        self.config
    }

    pub fn entries(&self) -> &[OutputEntry] {
        &self.entries
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, OutputEntry::Error(_)))
    }

    /// True if some error entry contains `fragment`.
    pub fn has_error_containing(&self, fragment: &str) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, OutputEntry::Error(msg) if msg.contains(fragment)))
    }

    /// True if some warning entry contains `fragment`.
    pub fn has_warning_containing(&self, fragment: &str) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, OutputEntry::Warning(msg) if msg.contains(fragment)))
    }

    /// True if some result entry contains `fragment`.
    pub fn has_result_containing(&self, fragment: &str) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, OutputEntry::Result(msg) if msg.contains(fragment)))
    }
}

impl Output for TestOutput {
    fn warning(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Error(msg.to_string()));
    }

    fn step(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Step(msg.to_string()));
    }

    fn result(&mut self, msg: &str) {
        self.entries.push(OutputEntry::Result(msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_entries_in_order() {
        let mut output = TestOutput::new();
        output.step("probing");
        output.warning("fell back");
        output.result("created");
        output.error("boom");

        assert_eq!(
            output.entries(),
            [
                OutputEntry::Step("probing".to_string()),
                OutputEntry::Warning("fell back".to_string()),
                OutputEntry::Result("created".to_string()),
                OutputEntry::Error("boom".to_string()),
            ]
        );
        assert!(output.has_errors());
        assert!(output.has_error_containing("boom"));
        assert!(output.has_warning_containing("fell back"));
        assert!(output.has_result_containing("created"));
    }

    #[test]
    fn test_quiet_config_still_captures() {
        let mut output = TestOutput::with_config(OutputConfig::new(true, false));
        output.warning("hello");
        assert_eq!(output.entries().len(), 1);
    }
}
