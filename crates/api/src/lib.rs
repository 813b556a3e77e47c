//! Emission Dashboard API Server
//!
//! Serves the dashboard page and the JSON refresh endpoint consumed by the
//! front-end chart.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::refresh::{CurrentConditions, HistoryPoint, PredictionSummary, RefreshResponse};

use air_series::SeriesGenerator;
use fallback::FallbackEstimator;
use feature_engine::FeaturePipeline;
use inference_engine::InferenceEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Application state shared across handlers.
///
/// Built once at startup and read-only afterward, so it is shared as a
/// plain `Arc` with no lock. The inference engine is `None` when the
/// trained artifacts could not be loaded; every request then takes the
/// fallback path.
pub struct AppState {
    /// Synthetic series generator
    pub generator: SeriesGenerator,
    /// Feature assembly pipeline
    pub pipeline: FeaturePipeline,
    /// Loaded scaler + model, absent in degraded mode
    pub engine: Option<InferenceEngine>,
    /// Degraded-mode estimator
    pub fallback: FallbackEstimator,
    /// Server configuration
    pub config: ServerConfig,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Build state from configuration, attempting the artifact load.
    ///
    /// A load failure is non-fatal: it is logged once and the server runs
    /// in degraded mode.
    pub fn from_config(config: ServerConfig) -> Self {
        let engine = match InferenceEngine::load(&config.scaler_path, &config.model_path) {
            Ok(engine) => Some(engine),
            Err(e) => {
                warn!(error = %e, "Artifacts unavailable, running in degraded mode");
                None
            }
        };
        Self::with_engine(config, engine)
    }

    /// Build state with an explicit engine (or none), for tests
    pub fn with_engine(config: ServerConfig, engine: Option<InferenceEngine>) -> Self {
        Self {
            generator: SeriesGenerator::default(),
            pipeline: FeaturePipeline,
            engine,
            fallback: FallbackEstimator,
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Per-request random source: seeded from config for reproducible runs,
    /// from entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// True when the artifacts failed to load and predictions are jittered
    pub degraded: bool,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/api/refresh-data", get(routes::refresh::refresh_data))
        .route("/api/v1/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        degraded: state.engine.is_none(),
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.bind_addr.clone();
    let state = Arc::new(AppState::from_config(config));
    let app = create_router(state);

    info!("Starting dashboard server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_degraded_without_engine() {
        let state = Arc::new(AppState::with_engine(ServerConfig::default(), None));
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["degraded"], true);
    }

    #[tokio::test]
    async fn test_dashboard_page_serves() {
        let state = Arc::new(AppState::with_engine(ServerConfig::default(), None));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
