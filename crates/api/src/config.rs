//! Server configuration

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server configuration, layered from defaults and `GREENPULSE_*`
/// environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind
    pub bind_addr: String,

    /// History window the generator produces per request (hours)
    pub hours: u32,

    /// Path to the fitted scaler artifact (JSON)
    pub scaler_path: PathBuf,

    /// Path to the trained regression model artifact (JSON)
    pub model_path: PathBuf,

    /// Fixed RNG seed for reproducible series, entropy-seeded when unset
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            hours: 24,
            scaler_path: PathBuf::from("models/scaler.json"),
            model_path: PathBuf::from("models/emission_model.json"),
            rng_seed: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration: defaults overridden by environment
    pub fn load() -> Result<Self, ConfigError> {
        let loaded: Self = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(Environment::with_prefix("GREENPULSE"))
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hours == 0 {
            return Err(ConfigError::Message(
                "hours must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
