//! Error types for the roomdeck domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all roomdeck operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Layout errors ---
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Caller-side precondition violations in tile sizing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
