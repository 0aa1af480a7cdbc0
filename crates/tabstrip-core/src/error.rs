//! Strip error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("Group error: {0}")]
    Group(#[from] tabstrip_groups::GroupError),

    #[error("Header error: {0}")]
    Header(#[from] tabstrip_header::HeaderError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Group already in strip: {0}")]
    DuplicateGroup(String),

    #[error("Group not found: {0}")]
    NotFound(String),

    #[error("Invalid arrangement: {0}")]
    InvalidArrangement(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
