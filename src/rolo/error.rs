use crate::fields::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact has no such phone: {0}")]
    PhoneNotFound(String),

    #[error("Key not found: {0}")]
    KeyNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Input cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, RoloError>;
