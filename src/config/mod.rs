use crate::domain::model::ProjectConfig;
use crate::utils::error::{BootstrapError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_repo_name, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ml-scaffold")]
#[command(about = "Bootstrap a new ML project: remote repo, layout, venv, initial branch")]
pub struct BootstrapConfig {
    /// Directory the project is created in
    #[arg(long)]
    pub path: PathBuf,

    /// Repository name (also becomes the root folder)
    #[arg(long)]
    pub root: String,

    /// Repository description
    #[arg(long, default_value = "")]
    pub desc: String,

    /// Python executable used to create the virtualenv (e.g. python3.10)
    #[arg(long, default_value = "python3")]
    pub python: String,

    /// Git branch to create and push
    #[arg(long, default_value = "task-1")]
    pub branch: String,

    /// Hosting-provider API base URL
    #[arg(long, default_value = "https://api.github.com")]
    pub api_url: String,

    /// Install requirements.txt into the new environment
    #[arg(long)]
    pub install: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for BootstrapConfig {
    fn validate(&self) -> Result<()> {
        validate_repo_name("root", &self.root)?;
        validate_path("path", &self.path.to_string_lossy())?;
        validate_non_empty_string("python", &self.python)?;
        validate_non_empty_string("branch", &self.branch)?;
        validate_url("api-url", &self.api_url)?;
        Ok(())
    }
}

impl BootstrapConfig {
    /// Merges the parsed flags with credentials into the immutable run config.
    pub fn into_project_config(self, credentials: Credentials) -> ProjectConfig {
        ProjectConfig {
            username: credentials.username,
            token: credentials.token,
            repo_name: self.root,
            description: self.desc,
            base_path: self.path,
            python: self.python,
            branch: self.branch,
            api_url: self.api_url,
            install_requirements: self.install,
        }
    }
}

/// Account credentials. Read from the process environment (optionally seeded
/// from a `.env` file), never from CLI flags.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; the variables may already be exported.
        let _ = dotenvy::dotenv();

        let username = required_var("GITHUB_USERNAME")?;
        let token = required_var("GITHUB_TOKEN")?;
        Ok(Self { username, token })
    }
}

fn required_var(variable: &str) -> Result<String> {
    match std::env::var(variable) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(BootstrapError::MissingCredential {
            variable: variable.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> BootstrapConfig {
        BootstrapConfig::parse_from(
            std::iter::once("ml-scaffold").chain(args.iter().copied()),
        )
    }

    #[test]
    fn branch_defaults_to_task_1() {
        let config = parse(&["--path", "/tmp", "--root", "demo-proj"]);
        assert_eq!(config.branch, "task-1");
    }

    #[test]
    fn defaults_cover_python_desc_and_api_url() {
        let config = parse(&["--path", "/tmp", "--root", "demo-proj"]);
        assert_eq!(config.python, "python3");
        assert_eq!(config.desc, "");
        assert_eq!(config.api_url, "https://api.github.com");
        assert!(!config.install);
    }

    #[test]
    fn validate_rejects_repo_name_with_separator() {
        let config = parse(&["--path", "/tmp", "--root", "a/b"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_api_url() {
        let config = parse(&["--path", "/tmp", "--root", "demo", "--api-url", "nope"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn into_project_config_merges_credentials() {
        let config = parse(&["--path", "/tmp", "--root", "demo-proj", "--desc", "x"]);
        let project = config.into_project_config(Credentials {
            username: "alice".into(),
            token: "t0k".into(),
        });
        assert_eq!(project.username, "alice");
        assert_eq!(project.token, "t0k");
        assert_eq!(project.repo_name, "demo-proj");
        assert_eq!(project.project_root(), PathBuf::from("/tmp/demo-proj"));
    }
}
