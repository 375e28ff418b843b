use thiserror::Error;

/// Errors produced by model constructors and catalog parsing.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("menu map has no `root` level")]
    MissingRoot,

    #[error("menu map contains an empty level key")]
    EmptyKey,

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
