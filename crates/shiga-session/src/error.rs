use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Backend error: {0}")]
    Api(#[from] shiga_api::ApiError),

    #[error("A send is already in flight")]
    SendInFlight,
}

pub type Result<T> = std::result::Result<T, SessionError>;
