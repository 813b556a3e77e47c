//! Hourly Reading and Emission Score

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One simulated hourly observation. Immutable once generated; numeric
/// fields are stored already rounded (pollutants and score to 2 decimals,
/// temp/rh to 1), so downstream features are computed over rounded values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    /// Calendar instant of the observation (second precision)
    pub timestamp: DateTime<Local>,
    /// Display label for the chart axis ("%H:%M")
    pub hour_label: String,
    /// Carbon monoxide concentration (mg/m3)
    pub co: f64,
    /// Benzene concentration (ug/m3)
    pub c6h6: f64,
    /// Nitrogen oxides concentration (ppb)
    pub nox: f64,
    /// Nitrogen dioxide concentration (ug/m3)
    pub no2: f64,
    /// Ambient temperature (C)
    pub temp: f64,
    /// Relative humidity (%)
    pub rh: f64,
    /// Emission score in [0, 10], higher is cleaner
    pub score: f64,
}

/// Compute the emission score from the four pollutant concentrations.
///
/// Each pollutant is normalized against a reference level, averaged, and
/// inverted so the result lands in [0, 10] with 10 = clean air. Temperature
/// and humidity do not enter the formula.
pub fn emission_score(co: f64, c6h6: f64, nox: f64, no2: f64) -> f64 {
    let pollutant_avg = (co / 5.0 + c6h6 / 15.0 + nox / 400.0 + no2 / 200.0) / 4.0;
    (10.0 * (1.0 - pollutant_avg)).clamp(0.0, 10.0)
}

/// Air-quality status band derived from an emission score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Score >= 6.5
    Safe,
    /// 4.0 <= score < 6.5
    Moderate,
    /// Score < 4.0
    HighEmissions,
}

impl Status {
    /// Classify a score into its band
    pub fn from_score(score: f64) -> Self {
        if score >= 6.5 {
            Status::Safe
        } else if score >= 4.0 {
            Status::Moderate
        } else {
            Status::HighEmissions
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Safe => "Safe",
            Status::Moderate => "Moderate",
            Status::HighEmissions => "High Emissions",
        }
    }

    /// Get dashboard color for this band
    pub fn color(&self) -> &'static str {
        match self {
            Status::Safe => "green",
            Status::Moderate => "yellow",
            Status::HighEmissions => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_at_base_levels() {
        // Base concentrations normalize to ~0.5208, so the score sits mid-band
        let score = emission_score(2.5, 8.0, 200.0, 110.0);
        let expected = 10.0 * (1.0 - (2.5 / 5.0 + 8.0 / 15.0 + 200.0 / 400.0 + 110.0 / 200.0) / 4.0);
        assert!((score - expected).abs() < 1e-12);
        assert!((score - 4.7917).abs() < 1e-4);
    }

    #[test]
    fn test_score_clamps_to_zero() {
        let score = emission_score(50.0, 150.0, 4000.0, 2000.0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_clamps_to_ten() {
        let score = emission_score(0.0, 0.0, 0.0, 0.0);
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Status::from_score(6.5), Status::Safe);
        assert_eq!(Status::from_score(6.499), Status::Moderate);
        assert_eq!(Status::from_score(4.0), Status::Moderate);
        assert_eq!(Status::from_score(3.999), Status::HighEmissions);
    }

    #[test]
    fn test_band_labels_and_colors() {
        assert_eq!(Status::Safe.as_str(), "Safe");
        assert_eq!(Status::Safe.color(), "green");
        assert_eq!(Status::Moderate.as_str(), "Moderate");
        assert_eq!(Status::Moderate.color(), "yellow");
        assert_eq!(Status::HighEmissions.as_str(), "High Emissions");
        assert_eq!(Status::HighEmissions.color(), "red");
    }
}
