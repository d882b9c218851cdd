use teams_core::ApiError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A screen reported a failure to the user; the alert text is the message.
    #[error("{0}")]
    Screen(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error in {path}: {message}")]
    Parse { path: String, message: String },
    #[error("Configuration could not be serialized: {0}")]
    Serialize(String),
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}
