// Adapters layer: concrete implementations for the external systems the
// bootstrap drives (hosting-provider HTTP API, git binary, venv module).

pub mod git_cli;
pub mod github;
pub mod venv;

pub use git_cli::GitCli;
pub use github::GithubHost;
pub use venv::PythonVenv;
