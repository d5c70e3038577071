use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Backend returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
