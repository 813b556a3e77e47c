//! Refresh-Data Route
//!
//! One request triggers one full generate-and-score cycle: synthesize the
//! history, derive lag/rolling features from it, score the next hour with
//! the trained model (or the fallback estimator), and classify both scores
//! into status bands.

use axum::{extract::State, Json};
use chrono::{DateTime, Local};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;
use air_series::{Reading, Status};
use feature_engine::{FeatureError, TimeContext};

/// Latest reading as shown on the dashboard
#[derive(Debug, Serialize)]
pub struct CurrentConditions {
    pub score: f64,
    pub status: String,
    pub color: String,
    pub timestamp: String,
    pub co: f64,
    pub nox: f64,
    pub no2: f64,
    pub temp: f64,
    pub rh: f64,
}

/// Next-hour prediction summary
#[derive(Debug, Serialize)]
pub struct PredictionSummary {
    pub score: f64,
    pub status: String,
    pub color: String,
}

/// One point of the historical chart
#[derive(Debug, Serialize)]
pub struct HistoryPoint {
    pub time: String,
    pub score: f64,
}

/// Full payload consumed by the front-end chart
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub success: bool,
    pub current: CurrentConditions,
    pub prediction: PredictionSummary,
    pub historical: Vec<HistoryPoint>,
}

/// Get current emission data and the next-hour prediction
pub async fn refresh_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let mut rng = state.rng();
    let response = build_refresh(&state, Local::now(), &mut rng)?;
    Ok(Json(response))
}

/// Request-scoped computation behind the handler, synchronous and pure
/// except for the random draws
pub fn build_refresh<R: Rng + ?Sized>(
    state: &AppState,
    now: DateTime<Local>,
    rng: &mut R,
) -> Result<RefreshResponse, ApiError> {
    let readings = state.generator.generate(state.config.hours, now, rng);
    let current = readings
        .last()
        .ok_or_else(|| ApiError::ScoringFailure("generator produced no readings".to_string()))?;

    let predicted_score = predict_next(state, &readings, current, now, rng)?;

    Ok(RefreshResponse {
        success: true,
        current: CurrentConditions {
            score: round2(current.score),
            status: Status::from_score(current.score).as_str().to_string(),
            color: Status::from_score(current.score).color().to_string(),
            timestamp: current.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            co: current.co,
            nox: current.nox,
            no2: current.no2,
            temp: current.temp,
            rh: current.rh,
        },
        prediction: PredictionSummary {
            score: round2(predicted_score),
            status: Status::from_score(predicted_score).as_str().to_string(),
            color: Status::from_score(predicted_score).color().to_string(),
        },
        historical: readings
            .iter()
            .map(|r| HistoryPoint {
                time: r.hour_label.clone(),
                score: r.score,
            })
            .collect(),
    })
}

/// Model path when the engine is loaded and the history is deep enough;
/// jittered fallback otherwise. The feature pipeline runs only when an
/// engine exists, so a short history never touches transform/predict.
fn predict_next<R: Rng + ?Sized>(
    state: &AppState,
    readings: &[Reading],
    current: &Reading,
    now: DateTime<Local>,
    rng: &mut R,
) -> Result<f64, ApiError> {
    let Some(engine) = &state.engine else {
        debug!("No engine loaded, using fallback estimate");
        return Ok(state.fallback.estimate(current.score, rng));
    };

    match state.pipeline.assemble(readings, &TimeContext::from_local(now)) {
        Ok(vector) => Ok(engine.predict_score(&vector)?),
        Err(FeatureError::InsufficientHistory { needed, got }) => {
            debug!(needed, got, "History too short, using fallback estimate");
            Ok(state.fallback.estimate(current.score, rng))
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
