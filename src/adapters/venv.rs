use crate::domain::ports::EnvProvisioner;
use crate::utils::error::{BootstrapError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Provisions a `venv` directory with the interpreter's own venv module.
pub struct PythonVenv;

fn pip_path(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join("pip.exe")
    } else {
        venv.join("bin").join("pip")
    }
}

fn run_checked(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    tracing::debug!("{} {}", program, args.join(" "));
    let mut command = Command::new(program);
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
        format!("exited with {}", output.status)
    } else {
        stderr.trim().to_string()
    };
    Err(BootstrapError::CommandError {
        program: program.to_string(),
        detail,
    })
}

impl EnvProvisioner for PythonVenv {
    fn create_env(&self, repo: &Path, python: &str) -> Result<PathBuf> {
        let venv = repo.join("venv");
        let venv_arg = venv.to_string_lossy();
        run_checked(python, &["-m", "venv", venv_arg.as_ref()], None)?;

        let pip = pip_path(&venv);
        if !pip.exists() {
            return Err(BootstrapError::CommandError {
                program: python.to_string(),
                detail: format!(
                    "pip not found at {}; ensure pip is bundled with the interpreter",
                    pip.display()
                ),
            });
        }
        Ok(venv)
    }

    fn install_requirements(&self, repo: &Path, manifest: &Path) -> Result<()> {
        let pip = pip_path(&repo.join("venv"));
        let pip = pip.to_string_lossy();
        let manifest = manifest.to_string_lossy();
        run_checked(pip.as_ref(), &["install", "-r", manifest.as_ref()], Some(repo))
    }
}
