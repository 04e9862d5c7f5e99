use crate::{
    config::Config,
    get_project_root, is_git_repository, logging,
    output::{CliOutput, Output, OutputConfig},
    utils::validate_branch_name,
    worktree::{Backend, CreateFailure, WorktreeService},
};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sprout")]
#[command(version = crate::VERSION)]
#[command(about = "Create a git worktree via the best available backend")]
#[command(long_about = r#"
Creates a worktree for <branch>, preferring the coworktree binary when
worktree.prefer_coworktree is enabled in the configuration and the binary is
installed, and falling back to `git worktree add` otherwise.

The destination defaults to a sibling of the project root named
<root-directory>-<branch>. The backend decision is made fresh on every
invocation; installing or removing coworktree takes effect immediately.
"#)]
pub struct Args {
    #[arg(help = "Branch to check out in the new worktree")]
    branch: String,

    #[arg(help = "Destination directory for the new worktree")]
    path: Option<PathBuf>,

    #[arg(
        long,
        help = "Repository to operate on; defaults to the repository containing the current directory"
    )]
    repo: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Read configuration from FILE instead of the user config file"
    )]
    config: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with = "no_coworktree",
        help = "Prefer the coworktree backend for this invocation"
    )]
    prefer_coworktree: bool,

    #[arg(long, help = "Do not use the coworktree backend for this invocation")]
    no_coworktree: bool,

    #[arg(short, long, help = "Operate quietly; suppress progress reporting")]
    quiet: bool,

    #[arg(short, long, help = "Be verbose; show detailed progress")]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version requests also arrive as parse errors and keep
            // exit code 0; genuine usage errors exit 1 like every other
            // failure of this tool.
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print().ok();
            std::process::exit(code);
        }
    };

    logging::init_logging(args.verbose, args.quiet);

    let mut output = CliOutput::new(OutputConfig::new(args.quiet, args.verbose));

    let result = load_config(&args).and_then(|config| run_create(&args, &config, &mut output));
    if let Err(err) = result {
        output.error(&format!("{err:#}"));
        std::process::exit(1);
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    apply_overrides(&mut config, args.prefer_coworktree, args.no_coworktree);
    Ok(config)
}

fn run_create(args: &Args, config: &Config, output: &mut dyn Output) -> Result<()> {
    validate_branch_name(&args.branch)?;

    let repo = match &args.repo {
        Some(path) => path.clone(),
        None => {
            if !is_git_repository()? {
                anyhow::bail!("Not inside a Git repository");
            }
            get_project_root()?
        }
    };

    let worktree_path = match &args.path {
        Some(path) => path.clone(),
        None => default_worktree_path(&repo, &args.branch)?,
    };

    output.step(&format!(
        "Creating worktree for '{}' at {}",
        args.branch,
        worktree_path.display()
    ));

    let service = WorktreeService::with_system(config);
    let outcome = service.create_worktree(&repo, &args.branch, &worktree_path);

    match outcome.failure {
        None => {
            if config.worktree.prefer_coworktree && outcome.backend == Backend::GitWorktree {
                output.warning("coworktree is preferred but was not found on PATH; used git worktree");
            }
            output.result(&format!(
                "Created worktree for '{}' at {} (via {})",
                args.branch,
                worktree_path.display(),
                outcome.backend
            ));
            Ok(())
        }
        Some(CreateFailure::Launch { error }) => {
            anyhow::bail!("Could not launch the {} backend: {}", outcome.backend, error)
        }
        Some(CreateFailure::Exit { code, stderr }) => {
            anyhow::bail!(
                "Worktree creation failed ({} exited with status {}): {}",
                outcome.backend,
                code,
                stderr.trim()
            )
        }
    }
}

/// Fold the per-invocation CLI flags into the loaded configuration.
/// The flags are mutually exclusive (enforced by clap).
fn apply_overrides(config: &mut Config, prefer_coworktree: bool, no_coworktree: bool) {
    if prefer_coworktree {
        config.worktree.prefer_coworktree = true;
    }
    if no_coworktree {
        config.worktree.prefer_coworktree = false;
    }
}

/// Default destination: a sibling of the project root named
/// `<root-directory>-<branch>`, with path separators in the branch name
/// flattened to dashes.
fn default_worktree_path(repo: &Path, branch: &str) -> Result<PathBuf> {
    let parent = repo
        .parent()
        .context("Repository has no parent directory for a sibling worktree")?;
    let repo_name = repo
        .file_name()
        .and_then(|n| n.to_str())
        .context("Failed to determine repository directory name")?;
    let dir_name = format!("{}-{}", repo_name, branch.replace('/', "-"));
    Ok(parent.join(dir_name))
}
