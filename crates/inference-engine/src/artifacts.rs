//! Trained Artifacts: Standard Scaler and Linear Regression Model

use crate::engine::{Regressor, Scaler};
use crate::InferenceError;
use feature_engine::{FeatureVector, FEATURE_DIMENSION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Fitted standard scaler: `(x - mean) / scale` per feature.
///
/// Serialized as JSON with `mean` and `scale` arrays exported from the
/// training run; both must carry exactly one entry per feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Load and validate a scaler artifact from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            InferenceError::ArtifactError(format!("{}: {}", path.display(), e))
        })?;
        let scaler: Self = serde_json::from_str(&raw).map_err(|e| {
            InferenceError::InvalidArtifact(format!("{}: {}", path.display(), e))
        })?;
        scaler.validate()?;
        info!(path = %path.display(), "Scaler artifact loaded");
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), InferenceError> {
        if self.mean.len() != FEATURE_DIMENSION {
            return Err(InferenceError::DimensionMismatch {
                expected: FEATURE_DIMENSION,
                actual: self.mean.len(),
            });
        }
        if self.scale.len() != FEATURE_DIMENSION {
            return Err(InferenceError::DimensionMismatch {
                expected: FEATURE_DIMENSION,
                actual: self.scale.len(),
            });
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(InferenceError::InvalidArtifact(
                "scaler contains a zero or non-finite scale entry".to_string(),
            ));
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, InferenceError> {
        let mut scaled = [0.0; FEATURE_DIMENSION];
        for (i, value) in features.as_slice().iter().enumerate() {
            scaled[i] = (value - self.mean[i]) / self.scale[i];
        }
        Ok(FeatureVector::new(scaled))
    }
}

/// Trained linear regression: dot product of coefficients plus intercept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Load and validate a model artifact from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            InferenceError::ArtifactError(format!("{}: {}", path.display(), e))
        })?;
        let model: Self = serde_json::from_str(&raw).map_err(|e| {
            InferenceError::InvalidArtifact(format!("{}: {}", path.display(), e))
        })?;
        if model.coefficients.len() != FEATURE_DIMENSION {
            return Err(InferenceError::DimensionMismatch {
                expected: FEATURE_DIMENSION,
                actual: model.coefficients.len(),
            });
        }
        info!(path = %path.display(), "Model artifact loaded");
        Ok(model)
    }
}

impl Regressor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.as_slice())
            .map(|(c, x)| c * x)
            .sum();
        Ok(dot + self.intercept)
    }
}
