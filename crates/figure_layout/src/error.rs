//! Error types for the layout engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid figure spec: {0}")]
    Spec(#[from] figure_model::SpecError),

    #[error("Layout overflow: {0}")]
    Overflow(String),

    #[error("Unsupported drawing operation: {0}")]
    UnsupportedOperation(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
