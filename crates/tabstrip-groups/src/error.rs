//! Group error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Snapshot is missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid snapshot field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Snapshot is not an object")]
    NotAnObject,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
