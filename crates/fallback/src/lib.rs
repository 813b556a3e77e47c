//! Degraded-Mode Score Estimation
//!
//! Provides a jittered estimate of the next emission score when model
//! inference is unavailable, either because the trained artifacts failed to
//! load at startup or because the history is too short for lag and rolling
//! features.

use rand::Rng;
use tracing::debug;

/// Estimates a prediction from the current score alone
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackEstimator;

impl FallbackEstimator {
    /// Jitter the current score by +/-10% and clamp into [0, 10].
    ///
    /// The model path clamps its output to the valid score range; the
    /// estimate clamps identically so both paths honor the same contract.
    pub fn estimate<R: Rng + ?Sized>(&self, current_score: f64, rng: &mut R) -> f64 {
        let jitter = rng.gen_range(0.9..=1.1);
        let estimate = (current_score * jitter).clamp(0.0, 10.0);
        debug!(current_score, estimate, "Fallback estimate used");
        estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_estimate_stays_near_current() {
        let estimator = FallbackEstimator;
        let mut rng = StdRng::seed_from_u64(11);
        let estimate = estimator.estimate(5.0, &mut rng);
        assert!((4.5..=5.5).contains(&estimate));
    }

    #[test]
    fn test_estimate_deterministic_under_seed() {
        let estimator = FallbackEstimator;
        let mut a = StdRng::seed_from_u64(2);
        let mut b = StdRng::seed_from_u64(2);
        assert_eq!(estimator.estimate(6.1, &mut a), estimator.estimate(6.1, &mut b));
    }

    proptest! {
        #[test]
        fn prop_estimate_clamped(score in 0.0f64..10.0, seed in any::<u64>()) {
            let estimator = FallbackEstimator;
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate = estimator.estimate(score, &mut rng);
            prop_assert!((0.0..=10.0).contains(&estimate));
        }

        #[test]
        fn prop_near_ceiling_never_exceeds_ten(seed in any::<u64>()) {
            let estimator = FallbackEstimator;
            let mut rng = StdRng::seed_from_u64(seed);
            prop_assert!(estimator.estimate(10.0, &mut rng) <= 10.0);
        }
    }
}
