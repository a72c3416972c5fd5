pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{GitCli, GithubHost, PythonVenv};
pub use crate::config::{BootstrapConfig, Credentials};
pub use crate::core::bootstrap::BootstrapEngine;
pub use crate::domain::model::{ProjectConfig, RepositoryHandle, FOLDER_TEMPLATE};
pub use crate::utils::error::{BootstrapError, Result};
