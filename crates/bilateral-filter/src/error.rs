//! Error types for bilateral-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bilateral_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// `run` called before any successful `set_sigma`
    #[error("filter not initialized: set_sigma must succeed before run")]
    NotInitialized,
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
