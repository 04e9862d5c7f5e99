//! User configuration for sprout.
//!
//! Configuration is a TOML file with a nested `[worktree]` table:
//!
//! ```toml
//! [worktree]
//! prefer_coworktree = true
//! ```
//!
//! # Config Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `worktree.prefer_coworktree` | `false` | Try the coworktree backend before falling back to `git worktree` |
//!
//! A `Config` value is constructed explicitly (from a file, a TOML string, or
//! defaults) and injected into the worktree service. It is never read through
//! a process-wide singleton, and it is immutable once built; callers establish
//! a new active configuration by constructing and injecting a new value.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default values for settings.
pub mod defaults {
    /// Default value for the worktree.prefer_coworktree setting.
    ///
    /// Absence of an explicit `true` means fallback-only behavior.
    pub const PREFER_COWORKTREE: bool = false;
}

/// Top-level sprout configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Worktree creation settings.
    pub worktree: WorktreeSettings,
}

/// Settings in the `[worktree]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorktreeSettings {
    /// Prefer the coworktree backend when it is installed.
    pub prefer_coworktree: bool,
}

impl Default for WorktreeSettings {
    fn default() -> Self {
        Self {
            prefer_coworktree: defaults::PREFER_COWORKTREE,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    ///
    /// Missing keys fall back to defaults; a malformed document is an error.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse sprout configuration")
    }

    /// Load configuration from an explicit file path.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load configuration from the user's config directory.
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Path of the user config file (`<config-dir>/sprout/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sprout").join("config.toml"))
    }
}
