use crate::domain::ports::VersionControl;
use crate::utils::error::{BootstrapError, Result};
use std::path::Path;
use std::process::Command;

/// Real `git` binary, driven over subprocess. The exit code is the sole
/// success signal; stderr is carried into the error verbatim.
pub struct GitCli;

impl GitCli {
    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        tracing::debug!("git {}", args.join(" "));
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output()?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            format!("git {} exited with {}", args.join(" "), output.status)
        } else {
            stderr.trim().to_string()
        };
        Err(BootstrapError::CommandError {
            program: "git".to_string(),
            detail,
        })
    }
}

impl VersionControl for GitCli {
    fn clone_repo(&self, clone_url: &str, target: &Path) -> Result<()> {
        let target = target.to_string_lossy();
        self.run(&["clone", clone_url, target.as_ref()], None)
    }

    fn create_branch(&self, repo: &Path, branch: &str) -> Result<()> {
        self.run(&["checkout", "-b", branch], Some(repo))
    }

    fn stage_all(&self, repo: &Path) -> Result<()> {
        self.run(&["add", "-A"], Some(repo))
    }

    fn has_staged_changes(&self, repo: &Path) -> Result<bool> {
        let output = Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(repo)
            .output()?;
        if !output.status.success() {
            return Err(BootstrapError::CommandError {
                program: "git".to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(!String::from_utf8_lossy(&output.stdout).trim().is_empty())
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message], Some(repo))
    }

    fn push_upstream(&self, repo: &Path, branch: &str) -> Result<()> {
        self.run(&["push", "-u", "origin", branch], Some(repo))
    }
}
