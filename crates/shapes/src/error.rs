//! Error types for shape encoding and decoding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// The text was not valid JSON, or did not have the fields of the requested shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A shape tag did not name any known shape.
    #[error("unknown shape kind: {0}")]
    UnknownShape(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
