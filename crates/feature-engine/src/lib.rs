//! Feature Engineering Engine
//!
//! Derives lag and rolling-window features from the reading history and
//! assembles the fixed-order vector the trained regression model expects.

mod pipeline;
mod vector;

pub use pipeline::{FeatureError, FeaturePipeline, TimeContext, MIN_HISTORY};
pub use vector::{FeatureVector, FEATURE_DIMENSION};
