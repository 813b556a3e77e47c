//! Emission Score Inference Engine
//!
//! Loads the externally-trained scaler and regression model from disk and
//! exposes them as capabilities behind the [`Scaler`] and [`Regressor`]
//! traits so tests can inject stubs.

mod artifacts;
mod engine;

pub use artifacts::{LinearModel, StandardScaler};
pub use engine::{InferenceEngine, Regressor, Scaler};

use thiserror::Error;

/// Errors during artifact loading or scoring
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Artifact load failed: {0}")]
    ArtifactError(String),
    #[error("Malformed artifact: {0}")]
    InvalidArtifact(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}
