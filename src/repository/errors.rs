use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("request timed out")]
    Timeout,

    #[error("directory service returned status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("query serialization error: {0}")]
    Serialization(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(feature = "client")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return RepositoryError::Timeout;
        }
        if let Some(status) = err.status() {
            return RepositoryError::Status(status.as_u16());
        }
        if err.is_decode() {
            return RepositoryError::Decode(err.to_string());
        }
        RepositoryError::Transport(err.to_string())
    }
}
