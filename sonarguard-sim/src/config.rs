//! Simulator configuration
//!
//! Defaults describe a small vehicle descending slowly toward the seabed
//! while closing on a wall ahead, pinging every 200-1000 ms.

use serde::{Deserialize, Serialize};

use sonarguard_core::constants::sonar::{
    MAX_RANGE_M, MIN_STANDOFF_M, MS_PER_SECOND, SPEED_OF_SOUND_WATER_M_PER_S,
};

use crate::errors::{SimError, SimResult};

/// Inclusive `[min, max]` interval sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T> Span<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Parameters of the synthetic sonar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Starting distance for each channel (m)
    pub initial_distance_m: Span<f32>,

    /// Per-ping random walk step (m); positive drifts away from obstacles
    pub step_m: Span<f32>,

    /// Distances never drop below this (m)
    pub min_distance_m: f32,

    /// Chance per ping and channel of an obstruction (fish, bubbles)
    pub obstruction_chance: f32,

    /// Obstruction distance is `base + U(span) * scale`
    pub obstruction_span_m: Span<f32>,
    pub obstruction_scale: f32,
    pub front_obstruction_base_m: f32,
    pub bottom_obstruction_base_m: f32,

    /// Echoes beyond this range time out (m)
    pub max_range_m: f32,

    /// Integer timing jitter added to round-trip times (ms)
    pub noise_ms: Span<i32>,

    /// Also jitter the timeout sentinel, as the legacy publisher did
    ///
    /// Off by default so a timeout always arrives as exactly the sentinel.
    pub jitter_timeouts: bool,

    /// Delay between pings (ms)
    pub interval_ms: Span<u64>,

    pub speed_of_sound_m_per_s: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_distance_m: Span::new(4.5, 11.3),
            step_m: Span::new(-0.02, 0.08),
            min_distance_m: MIN_STANDOFF_M,
            obstruction_chance: 0.05,
            obstruction_span_m: Span::new(0.5, 26.0),
            obstruction_scale: 0.1,
            front_obstruction_base_m: 0.7,
            bottom_obstruction_base_m: 0.3,
            max_range_m: MAX_RANGE_M,
            noise_ms: Span::new(-2, 2),
            jitter_timeouts: false,
            interval_ms: Span::new(200, 1000),
            speed_of_sound_m_per_s: SPEED_OF_SOUND_WATER_M_PER_S,
        }
    }
}

impl SimConfig {
    /// Noise-free configuration: no jitter, no obstructions
    pub fn clean() -> Self {
        Self {
            obstruction_chance: 0.0,
            noise_ms: Span::new(0, 0),
            ..Self::default()
        }
    }

    /// Round-trip milliseconds per meter of range
    ///
    /// Use as the filter divisor to get true meters out of simulated times.
    pub fn round_trip_ms_per_meter(&self) -> f32 {
        2.0 * MS_PER_SECOND / self.speed_of_sound_m_per_s
    }

    /// Check every span and probability before sampling from them
    pub fn validate(&self) -> SimResult<()> {
        check_span("initial_distance_m", self.initial_distance_m)?;
        check_span("step_m", self.step_m)?;
        check_span("obstruction_span_m", self.obstruction_span_m)?;

        if self.noise_ms.min > self.noise_ms.max {
            return Err(SimError::InvalidSpan { field: "noise_ms" });
        }
        if self.interval_ms.min > self.interval_ms.max {
            return Err(SimError::InvalidSpan { field: "interval_ms" });
        }

        if !(0.0..=1.0).contains(&self.obstruction_chance) {
            return Err(SimError::InvalidProbability {
                field: "obstruction_chance",
                value: self.obstruction_chance,
            });
        }

        if !(self.speed_of_sound_m_per_s.is_finite() && self.speed_of_sound_m_per_s > 0.0) {
            return Err(SimError::InvalidParameter { field: "speed_of_sound_m_per_s" });
        }
        if !self.max_range_m.is_finite() || !self.min_distance_m.is_finite() {
            return Err(SimError::InvalidParameter { field: "range limits" });
        }

        Ok(())
    }
}

fn check_span(field: &'static str, span: Span<f32>) -> SimResult<()> {
    if span.min.is_finite() && span.max.is_finite() && span.min <= span.max {
        Ok(())
    } else {
        Err(SimError::InvalidSpan { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig::clean().validate().is_ok());
    }

    #[test]
    fn round_trip_factor() {
        let config = SimConfig::default();
        // 1481 m/s: one meter of range is 2000/1481 ms round trip
        assert!((config.round_trip_ms_per_meter() - 1.350_439).abs() < 1e-5);
    }

    #[test]
    fn rejects_bad_spans() {
        let config = SimConfig {
            step_m: Span::new(0.1, -0.1),
            ..SimConfig::default()
        };
        assert_eq!(config.validate(), Err(SimError::InvalidSpan { field: "step_m" }));

        let config = SimConfig {
            interval_ms: Span::new(500, 100),
            ..SimConfig::default()
        };
        assert_eq!(config.validate(), Err(SimError::InvalidSpan { field: "interval_ms" }));
    }

    #[test]
    fn rejects_bad_probability() {
        let config = SimConfig {
            obstruction_chance: 1.5,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidProbability { field: "obstruction_chance", .. })
        ));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "obstruction_chance": 0.0, "max_range_m": 50.0 }"#).unwrap();
        assert_eq!(config.obstruction_chance, 0.0);
        assert_eq!(config.max_range_m, 50.0);
        assert_eq!(config.interval_ms, Span::new(200, 1000));
    }
}
