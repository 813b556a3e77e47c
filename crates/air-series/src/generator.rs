//! Synthetic Hourly Series Generator

use crate::reading::{emission_score, Reading};
use chrono::{DateTime, Duration, Local, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Baseline concentrations the generator modulates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseLevels {
    /// CO baseline (mg/m3)
    pub co: f64,
    /// Benzene baseline (ug/m3)
    pub c6h6: f64,
    /// NOx baseline (ppb)
    pub nox: f64,
    /// NO2 baseline (ug/m3)
    pub no2: f64,
    /// Temperature baseline (C)
    pub temp: f64,
    /// Relative humidity baseline (%)
    pub rh: f64,
}

impl Default for BaseLevels {
    fn default() -> Self {
        Self {
            co: 2.5,
            c6h6: 8.0,
            nox: 200.0,
            no2: 110.0,
            temp: 22.0,
            rh: 50.0,
        }
    }
}

/// Multiplicative modifier for commuting patterns at a given local hour.
///
/// Rush hours (7-9 and 17-19, inclusive) push pollutants up by 1.5x; night
/// hours (22 onward through 5) drop them to 0.6x; everything else is flat.
pub fn traffic_factor(hour: u32) -> f64 {
    if (7..=9).contains(&hour) || (17..=19).contains(&hour) {
        1.5
    } else if hour >= 22 || hour <= 5 {
        0.6
    } else {
        1.0
    }
}

/// Generator for synthetic hourly pollutant readings
#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    base: BaseLevels,
}

impl SeriesGenerator {
    /// Create a generator over the given baselines
    pub fn new(base: BaseLevels) -> Self {
        Self { base }
    }

    /// Generate `hours` readings ending one hour before `now`.
    ///
    /// Readings are oldest-first with strict one-hour spacing: timestamps
    /// run from `now - hours` through `now - 1` hours. The four pollutants
    /// share a single noise draw per reading; temp and rh draw
    /// independently. All randomness flows through `rng` so a seeded source
    /// reproduces the series exactly.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        hours: u32,
        now: DateTime<Local>,
        rng: &mut R,
    ) -> Vec<Reading> {
        let mut readings = Vec::with_capacity(hours as usize);

        for i in (1..=i64::from(hours)).rev() {
            let timestamp = now - Duration::hours(i);
            let factor = traffic_factor(timestamp.hour());

            // One shared draw for all four pollutants, not four independent ones
            let noise = rng.gen_range(0.85..=1.15);

            let co = self.base.co * factor * noise;
            let c6h6 = self.base.c6h6 * factor * noise;
            let nox = self.base.nox * factor * noise;
            let no2 = self.base.no2 * factor * noise;
            let temp = self.base.temp + rng.gen_range(-3.0..=3.0);
            let rh = self.base.rh + rng.gen_range(-10.0..=10.0);

            let score = emission_score(co, c6h6, nox, no2);

            // Rounding happens before storage; lag and rolling features
            // downstream see the rounded values.
            readings.push(Reading {
                timestamp,
                hour_label: timestamp.format("%H:%M").to_string(),
                co: round2(co),
                c6h6: round2(c6h6),
                nox: round2(nox),
                no2: round2(no2),
                temp: round1(temp),
                rh: round1(rh),
                score: round2(score),
            });
        }

        readings
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_traffic_factor_boundaries() {
        assert_eq!(traffic_factor(9), 1.5);
        assert_eq!(traffic_factor(10), 1.0);
        assert_eq!(traffic_factor(17), 1.5);
        assert_eq!(traffic_factor(19), 1.5);
        assert_eq!(traffic_factor(20), 1.0);
        assert_eq!(traffic_factor(22), 0.6);
        assert_eq!(traffic_factor(5), 0.6);
        assert_eq!(traffic_factor(6), 1.0);
        assert_eq!(traffic_factor(7), 1.5);
    }

    #[test]
    fn test_generates_exact_count_oldest_first() {
        let gen = SeriesGenerator::default();
        let mut rng = StdRng::seed_from_u64(7);
        let readings = gen.generate(24, fixed_now(), &mut rng);

        assert_eq!(readings.len(), 24);
        for pair in readings.windows(2) {
            let gap = pair[1].timestamp - pair[0].timestamp;
            assert_eq!(gap, Duration::hours(1));
        }
        // Latest reading is one hour before "now", never "now" itself
        assert_eq!(fixed_now() - readings[23].timestamp, Duration::hours(1));
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let gen = SeriesGenerator::default();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = gen.generate(24, fixed_now(), &mut a);
        let second = gen.generate(24, fixed_now(), &mut b);

        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.co, y.co);
            assert_eq!(x.c6h6, y.c6h6);
            assert_eq!(x.nox, y.nox);
            assert_eq!(x.no2, y.no2);
            assert_eq!(x.temp, y.temp);
            assert_eq!(x.rh, y.rh);
            assert_eq!(x.score, y.score);
        }
    }

    #[test]
    fn test_hour_label_matches_timestamp() {
        let gen = SeriesGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);
        let readings = gen.generate(3, fixed_now(), &mut rng);
        for r in &readings {
            assert_eq!(r.hour_label, r.timestamp.format("%H:%M").to_string());
        }
    }

    proptest! {
        #[test]
        fn prop_length_and_ordering(hours in 1u32..72, seed in any::<u64>()) {
            let gen = SeriesGenerator::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let readings = gen.generate(hours, fixed_now(), &mut rng);

            prop_assert_eq!(readings.len(), hours as usize);
            for pair in readings.windows(2) {
                prop_assert!(pair[0].timestamp < pair[1].timestamp);
            }
        }

        #[test]
        fn prop_score_always_clamped(seed in any::<u64>()) {
            let gen = SeriesGenerator::default();
            let mut rng = StdRng::seed_from_u64(seed);
            for r in gen.generate(24, fixed_now(), &mut rng) {
                prop_assert!(r.score >= 0.0 && r.score <= 10.0);
            }
        }
    }
}
