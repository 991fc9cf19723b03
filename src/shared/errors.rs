use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to attach listener: {0}")]
    ListenerFailed(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
