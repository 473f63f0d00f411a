use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("document store unavailable: no live connection")]
    Unavailable,
    #[error("store read error: {0}")]
    Read(String),
    #[error("store write error: {0}")]
    Write(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}
