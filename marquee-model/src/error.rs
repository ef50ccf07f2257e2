use thiserror::Error;

/// Errors produced by model constructors and parsers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid media id: {0}")]
    InvalidId(String),

    #[error("unknown backdrop size: {0}")]
    UnknownBackdropSize(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
