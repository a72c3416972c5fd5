pub mod bootstrap;
pub mod scaffold;

pub use crate::domain::model::{ProjectConfig, RepositoryHandle};
pub use crate::domain::ports::{EnvProvisioner, RepositoryHost, VersionControl};
pub use crate::utils::error::Result;
