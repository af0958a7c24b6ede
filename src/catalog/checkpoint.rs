//! Checkpoint functions - record the generated catalog in version control

use std::path::Path;
use std::process::Command;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum VcsError {
    /// The working tree already matches the index; commit was a no-op
    #[error("nothing to commit")]
    NothingToCommit,

    #[error("git {command} exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),
}

/// Narrow version-control capability used by the checkpoint step.
///
/// Kept minimal so the pipeline can be tested against a recording fake
/// instead of a real git working tree.
pub trait Vcs {
    fn stage(&self, path: &Path) -> Result<(), VcsError>;
    fn commit(&self, message: &str) -> Result<(), VcsError>;
    fn push(&self) -> Result<(), VcsError>;
}

/// `Vcs` implementation shelling out to the git CLI.
///
/// Assumes an already-initialized working directory with a configured
/// remote and credentials; performs no setup or validation of that.
pub struct GitCli;

impl GitCli {
    fn run(args: &[&str]) -> Result<std::process::Output, VcsError> {
        info!("Running: git {}", args.join(" "));
        let output = Command::new("git").args(args).output()?;
        Ok(output)
    }
}

impl Vcs for GitCli {
    fn stage(&self, path: &Path) -> Result<(), VcsError> {
        let path = path.to_string_lossy();
        let output = Self::run(&["add", &path])?;
        if !output.status.success() {
            return Err(VcsError::CommandFailed {
                command: "add".to_string(),
                status: output.status.to_string(),
            });
        }
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), VcsError> {
        let output = Self::run(&["commit", "-m", message])?;
        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if stdout.contains("nothing to commit") || stdout.contains("nothing added to commit") {
                return Err(VcsError::NothingToCommit);
            }
            return Err(VcsError::CommandFailed {
                command: "commit".to_string(),
                status: output.status.to_string(),
            });
        }
        Ok(())
    }

    fn push(&self) -> Result<(), VcsError> {
        let output = Self::run(&["push"])?;
        if !output.status.success() {
            return Err(VcsError::CommandFailed {
                command: "push".to_string(),
                status: output.status.to_string(),
            });
        }
        Ok(())
    }
}

/// Stage, commit and push the generated file.
///
/// An unchanged file is a benign no-op: the commit failure is logged as a
/// warning and the push is skipped. Any other failure propagates.
pub fn run_checkpoint(vcs: &dyn Vcs, path: &Path, message: &str) -> Result<(), VcsError> {
    info!("Running git add/commit/push...");

    vcs.stage(path)?;

    match vcs.commit(message) {
        Ok(()) => {}
        Err(VcsError::NothingToCommit) => {
            warn!("git commit skipped: nothing to commit");
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    vcs.push()?;
    info!("git push complete");

    Ok(())
}
