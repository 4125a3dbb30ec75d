use thiserror::Error;

#[derive(Error, Debug)]
pub enum PubverError {
    #[error("Version parameter required")]
    MissingArgument,

    #[error("Invalid version '{0}': must not contain line breaks")]
    InvalidVersion(String),

    #[error("{0} not found")]
    FileNotFound(String),

    #[error("Version field not found in {0}")]
    Format(String),

    #[error("Build number in '{0}' is too large to increment")]
    BuildNumberOutOfRange(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PubverError>;
