//! Inference Engine Implementation

use crate::artifacts::{LinearModel, StandardScaler};
use crate::InferenceError;
use feature_engine::FeatureVector;
use std::path::Path;
use tracing::{debug, info};

/// Fitted feature-scaling capability
pub trait Scaler: Send + Sync {
    /// Scale a raw feature vector into model space
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, InferenceError>;
}

/// Trained regression capability
pub trait Regressor: Send + Sync {
    /// Predict an (unclamped) emission score from a scaled vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError>;
}

/// Scores feature vectors through the trained scaler + model pair.
///
/// Read-only after construction; the api layer shares one instance across
/// all requests without locking.
pub struct InferenceEngine {
    scaler: Box<dyn Scaler>,
    model: Box<dyn Regressor>,
}

impl InferenceEngine {
    /// Load both artifacts from disk
    pub fn load(scaler_path: &Path, model_path: &Path) -> Result<Self, InferenceError> {
        let scaler = StandardScaler::from_file(scaler_path)?;
        let model = LinearModel::from_file(model_path)?;
        info!("Inference engine ready");
        Ok(Self::from_parts(Box::new(scaler), Box::new(model)))
    }

    /// Assemble an engine from explicit capabilities (test seam)
    pub fn from_parts(scaler: Box<dyn Scaler>, model: Box<dyn Regressor>) -> Self {
        Self { scaler, model }
    }

    /// Transform, predict, and clamp the score into [0, 10]
    pub fn predict_score(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let start = std::time::Instant::now();

        let scaled = self.scaler.transform(features)?;
        let raw = self.model.predict(&scaled)?;
        let score = raw.clamp(0.0, 10.0);

        debug!(
            raw,
            score,
            latency_us = start.elapsed().as_micros() as u64,
            "Inference completed"
        );
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feature_engine::FEATURE_DIMENSION;

    struct IdentityScaler;

    impl Scaler for IdentityScaler {
        fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, InferenceError> {
            Ok(features.clone())
        }
    }

    struct ConstantModel(f64);

    impl Regressor for ConstantModel {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, InferenceError> {
            Ok(self.0)
        }
    }

    fn engine_returning(value: f64) -> InferenceEngine {
        InferenceEngine::from_parts(Box::new(IdentityScaler), Box::new(ConstantModel(value)))
    }

    #[test]
    fn test_predict_passes_through_in_range() {
        let engine = engine_returning(7.2);
        let score = engine.predict_score(&FeatureVector::default()).unwrap();
        assert!((score - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_predict_clamps_high() {
        let engine = engine_returning(42.0);
        let score = engine.predict_score(&FeatureVector::default()).unwrap();
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_predict_clamps_low() {
        let engine = engine_returning(-3.0);
        let score = engine.predict_score(&FeatureVector::default()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_scaled_linear_path() {
        // Mean 1, scale 2, coefficient 1 on the first feature only
        let scaler = crate::StandardScaler {
            mean: vec![1.0; FEATURE_DIMENSION],
            scale: vec![2.0; FEATURE_DIMENSION],
        };
        let mut coefficients = vec![0.0; FEATURE_DIMENSION];
        coefficients[0] = 1.0;
        let model = crate::LinearModel {
            coefficients,
            intercept: 4.0,
        };
        let engine = InferenceEngine::from_parts(Box::new(scaler), Box::new(model));

        let mut values = [1.0; FEATURE_DIMENSION];
        values[0] = 5.0; // scales to (5-1)/2 = 2
        let score = engine.predict_score(&FeatureVector::new(values)).unwrap();
        assert!((score - 6.0).abs() < 1e-9);
    }
}
