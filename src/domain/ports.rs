use crate::domain::model::{ProjectConfig, RepositoryHandle};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Hosting-provider API surface. The single real implementation talks HTTP;
/// tests point it at a stub server or swap in a fake.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    async fn create_repository(&self, config: &ProjectConfig) -> Result<RepositoryHandle>;
}

/// Version-control operations the bootstrap sequence needs. Exit code of the
/// underlying tool is the only success signal the real implementation consumes.
pub trait VersionControl: Send + Sync {
    fn clone_repo(&self, clone_url: &str, target: &Path) -> Result<()>;
    fn create_branch(&self, repo: &Path, branch: &str) -> Result<()>;
    fn stage_all(&self, repo: &Path) -> Result<()>;
    fn has_staged_changes(&self, repo: &Path) -> Result<bool>;
    fn commit(&self, repo: &Path, message: &str) -> Result<()>;
    fn push_upstream(&self, repo: &Path, branch: &str) -> Result<()>;
}

/// Isolated interpreter environment provisioning.
pub trait EnvProvisioner: Send + Sync {
    /// Creates the environment directory inside `repo` and returns its path.
    fn create_env(&self, repo: &Path, python: &str) -> Result<PathBuf>;
    fn install_requirements(&self, repo: &Path, manifest: &Path) -> Result<()>;
}
