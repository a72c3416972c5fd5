use crate::core::scaffold;
use crate::core::{EnvProvisioner, RepositoryHost, VersionControl};
use crate::domain::model::{ProjectConfig, FOLDER_TEMPLATE};
use crate::utils::error::{BootstrapError, Result};
use std::path::PathBuf;

/// Runs the bootstrap sequence over the three capability ports. Strictly
/// sequential; the first failing step unwinds the whole run, and nothing
/// already done is rolled back.
pub struct BootstrapEngine<H: RepositoryHost, V: VersionControl, E: EnvProvisioner> {
    host: H,
    vcs: V,
    env: E,
    config: ProjectConfig,
}

impl<H: RepositoryHost, V: VersionControl, E: EnvProvisioner> BootstrapEngine<H, V, E> {
    pub fn new(host: H, vcs: V, env: E, config: ProjectConfig) -> Self {
        Self {
            host,
            vcs,
            env,
            config,
        }
    }

    pub async fn run(&self) -> Result<PathBuf> {
        let config = &self.config;

        tracing::info!("Creating repository '{}' on the provider", config.repo_name);
        let handle = self.host.create_repository(config).await?;
        tracing::info!("Repository available at {}", handle.html_url());

        let root = config.project_root();
        tracing::info!("Cloning into {}", root.display());
        self.vcs
            .clone_repo(&handle.clone_url(&config.token), &root)?;

        tracing::info!("Materializing project template");
        scaffold::materialize(&root, FOLDER_TEMPLATE)?;

        tracing::info!("Provisioning virtual environment with {}", config.python);
        let venv = self.env.create_env(&root, &config.python)?;
        tracing::info!("Virtual environment created at {}", venv.display());
        let manifest = scaffold::write_requirements(&root)?;
        if config.install_requirements {
            tracing::info!("Installing dependencies from {}", manifest.display());
            self.env.install_requirements(&root, &manifest)?;
        }

        tracing::info!("Writing activation scripts");
        scaffold::write_activation_scripts(&root)?;

        tracing::info!("Writing .gitignore");
        scaffold::write_gitignore(&root)?;

        tracing::info!("Publishing branch '{}'", config.branch);
        self.publish(&root)?;

        Ok(root)
    }

    fn publish(&self, root: &std::path::Path) -> Result<()> {
        let branch = &self.config.branch;
        self.vcs.create_branch(root, branch)?;

        // Empty directories are invisible to git without a placeholder.
        scaffold::keep_empty_dirs(root)?;

        self.vcs.stage_all(root)?;
        if !self.vcs.has_staged_changes(root)? {
            return Err(BootstrapError::CommandError {
                program: "git".to_string(),
                detail: "nothing to commit; the working tree is clean".to_string(),
            });
        }

        self.vcs
            .commit(root, &format!("Initialize {} structure", branch))?;
        self.vcs.push_upstream(root, branch)?;
        Ok(())
    }
}
