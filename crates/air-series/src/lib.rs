//! Pollutant Reading Model and Series Generation
//!
//! Provides the hourly reading data model, the emission-score formula, and a
//! synthetic series generator with time-of-day traffic modulation.

mod generator;
mod reading;

pub use generator::{traffic_factor, BaseLevels, SeriesGenerator};
pub use reading::{emission_score, Reading, Status};
