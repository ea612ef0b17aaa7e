use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to refresh access token: {0}")]
    TokenRefresh(String),

    #[error("Device lookup failed: {0}")]
    DeviceLookup(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
