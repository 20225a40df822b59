//! Error handling for the disease probability engine.
//!
//! The probability models themselves never fail: unknown lesions are absorbed
//! as zero-contribution events. Errors only surface at the edges, when parsing
//! names, loading configuration or reading detection files.

use std::io;

/// Specialized error type for the engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A lesion name that is not one of the canonical lesion types
    #[error("Unknown lesion type: {0}")]
    UnknownLesion(String),

    /// A disease name that is not one of the canonical disease types
    #[error("Unknown disease type: {0}")]
    UnknownDisease(String),

    /// Configuration values that violate their invariants
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
