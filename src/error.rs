// File: src/error.rs
use thiserror::Error;

/// Errors raised by the fallible surfaces of the crate.
///
/// Text classification and normalization never fail; only formatting,
/// document handling, configuration and persistence do.
#[derive(Error, Debug)]
pub enum ArabicError {
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("invalid date value: {0}")]
    InvalidDate(String),

    #[error("html error: {0}")]
    Html(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<bincode::Error> for ArabicError {
    fn from(err: bincode::Error) -> Self {
        ArabicError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ArabicError {
    fn from(err: serde_json::Error) -> Self {
        ArabicError::Serialization(err.to_string())
    }
}

impl From<tempfile::PersistError> for ArabicError {
    fn from(err: tempfile::PersistError) -> Self {
        ArabicError::Io(err.error)
    }
}

pub type Result<T> = std::result::Result<T, ArabicError>;
