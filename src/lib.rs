use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub mod commands;
pub mod config;
pub mod exec;
pub mod logging;
pub mod output;
pub mod probe;
pub mod utils;
pub mod worktree;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn is_git_repository() -> Result<bool> {
    let status = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to check if inside Git repository")?;

    Ok(status.success())
}

pub fn get_git_common_dir() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--git-common-dir"])
        .output()
        .context("Failed to get git common directory")?;

    if !output.status.success() {
        anyhow::bail!("Not inside a Git repository");
    }

    let path_str = String::from_utf8(output.stdout)
        .context("Failed to parse git common directory output")?
        .trim()
        .to_string();

    Ok(PathBuf::from(path_str))
}

pub fn get_project_root() -> Result<PathBuf> {
    let git_common_dir = get_git_common_dir()?;
    let project_root = git_common_dir
        .parent()
        .context("Failed to determine project root directory")?;
    Ok(project_root.to_path_buf())
}
