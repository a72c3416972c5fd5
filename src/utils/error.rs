use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Hosting provider rejected the request (status {status}): {message}")]
    RepoHostError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("'{program}' failed: {detail}")]
    CommandError { program: String, detail: String },

    #[error("Missing credential: set {variable} in the environment or a .env file")]
    MissingCredential { variable: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
