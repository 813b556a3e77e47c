//! Feature Assembly Pipeline

use crate::vector::{FeatureVector, FEATURE_DIMENSION};
use air_series::Reading;
use chrono::{DateTime, Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Minimum readings the pipeline needs (lag-1 plus a 6-hour rolling window)
pub const MIN_HISTORY: usize = 6;

/// Errors during feature assembly
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("insufficient history: need {needed} readings, got {got}")]
    InsufficientHistory { needed: usize, got: usize },
}

/// Wall-clock time fields fed into the vector.
///
/// Taken from the actual request moment, not the simulated timestamps.
/// `day_of_week` uses 0 = Monday (chrono's `num_days_from_monday`), the
/// convention the regression model was trained against; changing it means
/// recalibrating the artifact, so it is fixed here rather than configurable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeContext {
    /// Hour of day, 0-23
    pub hour_num: u32,
    /// Day of week, 0 = Monday
    pub day_of_week: u32,
    /// Month, 1-12
    pub month: u32,
}

impl TimeContext {
    /// Build from a local wall-clock instant
    pub fn from_local(now: DateTime<Local>) -> Self {
        Self {
            hour_num: now.hour(),
            day_of_week: now.weekday().num_days_from_monday(),
            month: now.month(),
        }
    }
}

/// Assembles the 16-feature vector from the reading history
#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturePipeline;

impl FeaturePipeline {
    /// Build the feature vector from an oldest-first reading history.
    ///
    /// Requires at least [`MIN_HISTORY`] readings; callers must route
    /// shorter histories to the fallback estimator instead of the model.
    pub fn assemble(
        &self,
        readings: &[Reading],
        time: &TimeContext,
    ) -> Result<FeatureVector, FeatureError> {
        if readings.len() < MIN_HISTORY {
            return Err(FeatureError::InsufficientHistory {
                needed: MIN_HISTORY,
                got: readings.len(),
            });
        }

        let current = &readings[readings.len() - 1];
        let lag = &readings[readings.len() - 2];
        let last3 = &readings[readings.len() - 3..];
        let last6 = &readings[readings.len() - 6..];

        let rolling_3h_co = mean(last3.iter().map(|r| r.co));
        let rolling_6h_co = mean(last6.iter().map(|r| r.co));
        let rolling_3h_nox = mean(last3.iter().map(|r| r.nox));
        let rolling_6h_nox = mean(last6.iter().map(|r| r.nox));

        // Guard the ratio: a zero-NOx reading must not divide
        let no2_nox_ratio = if current.nox > 0.0 {
            current.no2 / current.nox
        } else {
            0.0
        };

        debug!(
            rolling_3h_co,
            rolling_6h_co, rolling_3h_nox, rolling_6h_nox, no2_nox_ratio,
            "Assembled derived features"
        );

        let mut values = [0.0; FEATURE_DIMENSION];
        let mut idx = 0;

        values[idx] = current.temp; idx += 1;
        values[idx] = current.rh; idx += 1;
        values[idx] = f64::from(time.hour_num); idx += 1;
        values[idx] = f64::from(time.day_of_week); idx += 1;
        values[idx] = f64::from(time.month); idx += 1;
        values[idx] = lag.co; idx += 1;
        values[idx] = lag.c6h6; idx += 1;
        values[idx] = lag.nox; idx += 1;
        values[idx] = lag.no2; idx += 1;
        values[idx] = lag.temp; idx += 1;
        values[idx] = lag.rh; idx += 1;
        values[idx] = rolling_3h_co; idx += 1;
        values[idx] = rolling_6h_co; idx += 1;
        values[idx] = rolling_3h_nox; idx += 1;
        values[idx] = rolling_6h_nox; idx += 1;
        values[idx] = no2_nox_ratio;

        Ok(FeatureVector::new(values))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
