//! Error types for the figure model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Invalid layout spec: {0}")]
    InvalidLayoutSpec(String),

    #[error("Unknown figure width preset: {0}")]
    UnknownFigurePreset(String),
}

pub type Result<T> = std::result::Result<T, SpecError>;
