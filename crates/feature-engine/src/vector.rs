//! Feature Vector Type

use serde::{Deserialize, Serialize};

/// Number of features in the vector (16 as trained)
pub const FEATURE_DIMENSION: usize = 16;

/// Feature vector for model scoring.
///
/// Index order is load-bearing — the trained model's weights depend on it
/// and it must never be permuted:
///
/// | idx | feature          | idx | feature          |
/// |-----|------------------|-----|------------------|
/// | 0   | temp             | 8   | lag.no2          |
/// | 1   | rh               | 9   | lag.temp         |
/// | 2   | hour_num         | 10  | lag.rh           |
/// | 3   | day_of_week      | 11  | rolling_3h.co    |
/// | 4   | month            | 12  | rolling_6h.co    |
/// | 5   | lag.co           | 13  | rolling_3h.nox   |
/// | 6   | lag.c6h6         | 14  | rolling_6h.nox   |
/// | 7   | lag.nox          | 15  | no2_nox_ratio    |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Raw feature values in the order above
    pub values: [f64; FEATURE_DIMENSION],
}

impl FeatureVector {
    /// Wrap an ordered value array
    pub fn new(values: [f64; FEATURE_DIMENSION]) -> Self {
        Self { values }
    }

    /// View the values as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            values: [0.0; FEATURE_DIMENSION],
        }
    }
}
