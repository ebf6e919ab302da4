//! Synthetic sonar generator
//!
//! ## Model
//!
//! Each ping:
//!
//! ```text
//! distance += U(step)            floored at min_distance
//!     │
//!     ├─ obstruction? ──► base + U(span)·scale   (front and bottom separately)
//!     │
//!     ├─ beyond max range? ──► TIMEOUT_SENTINEL
//!     │     else 2·1000·d / c   (round trip, ms)
//!     │
//!     └─ + integer jitter     (skipped for the sentinel unless jitter_timeouts)
//! ```
//!
//! The true distances keep drifting underneath obstructions; an obstruction
//! only corrupts the reported time for that one ping.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use sonarguard_core::constants::sonar::{MS_PER_SECOND, TIMEOUT_SENTINEL};
use sonarguard_core::stream::{Stream, StreamError};
use sonarguard_core::{Channel, SamplePair};

use crate::config::SimConfig;
use crate::errors::SimResult;

/// One simulated ping on both channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimFrame {
    /// Simulated time of the ping (ms since start)
    pub timestamp_ms: u64,

    /// Round-trip times with jitter, what the sensor reports (ms)
    pub noisy: SamplePair,

    /// Round-trip times before jitter, obstructions included (ms)
    pub clean: SamplePair,

    /// Ground-truth distances (m)
    pub distance: SamplePair,

    /// Channels whose echo came from an obstruction this ping
    pub obstructed: [bool; 2],
}

impl SimFrame {
    pub fn is_obstructed(&self, channel: Channel) -> bool {
        self.obstructed[channel as usize]
    }
}

/// Convert a range to a round-trip time, or the sentinel when out of range
pub fn distance_to_round_trip_ms(distance_m: f32, config: &SimConfig) -> f32 {
    if distance_m > config.max_range_m {
        return TIMEOUT_SENTINEL;
    }

    2.0 * MS_PER_SECOND * distance_m / config.speed_of_sound_m_per_s
}

/// Random-walk sonar producing [`SimFrame`]s
#[derive(Debug, Clone)]
pub struct SonarSimulator {
    config: SimConfig,
    rng: StdRng,
    distance: [f32; 2],
    clock_ms: u64,
    generated: u64,
    limit: Option<u64>,
}

impl SonarSimulator {
    /// Simulator seeded from OS entropy
    pub fn new(config: SimConfig) -> SimResult<Self> {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Reproducible simulator
    pub fn seeded(config: SimConfig, seed: u64) -> SimResult<Self> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: SimConfig, mut rng: StdRng) -> SimResult<Self> {
        config.validate()?;

        let initial = config.initial_distance_m;
        let distance = [
            rng.gen_range(initial.min..=initial.max),
            rng.gen_range(initial.min..=initial.max),
        ];

        log::debug!(
            "sonar simulator start: front {:.2} m, bottom {:.2} m",
            distance[0], distance[1]
        );

        Ok(Self {
            config,
            rng,
            distance,
            clock_ms: 0,
            generated: 0,
            limit: None,
        })
    }

    /// Stop after `frames` pings
    pub fn with_limit(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Current ground-truth distance for a channel (m)
    pub fn distance(&self, channel: Channel) -> f32 {
        self.distance[channel as usize]
    }

    pub fn frames_generated(&self) -> u64 {
        self.generated
    }

    pub fn is_exhausted(&self) -> bool {
        self.limit.map_or(false, |limit| self.generated >= limit)
    }

    /// Generate the next ping, ignoring any frame limit
    pub fn next_frame(&mut self) -> SimFrame {
        let interval = self.config.interval_ms;
        self.clock_ms += self.rng.gen_range(interval.min..=interval.max);

        for channel in Channel::ALL {
            self.step(channel);
        }

        let mut clean = [0.0f32; 2];
        let mut noisy = [0.0f32; 2];
        let mut obstructed = [false; 2];

        for channel in Channel::ALL {
            let idx = channel as usize;
            let echo_m = match self.obstruction(channel) {
                Some(obstacle_m) => {
                    obstructed[idx] = true;
                    obstacle_m
                }
                None => self.distance[idx],
            };

            clean[idx] = distance_to_round_trip_ms(echo_m, &self.config);
            noisy[idx] = if clean[idx] == TIMEOUT_SENTINEL && !self.config.jitter_timeouts {
                TIMEOUT_SENTINEL
            } else {
                clean[idx] + self.jitter_ms() as f32
            };
        }

        self.generated += 1;

        let frame = SimFrame {
            timestamp_ms: self.clock_ms,
            noisy: SamplePair::from(noisy),
            clean: SamplePair::from(clean),
            distance: SamplePair::from(self.distance),
            obstructed,
        };

        log::trace!(
            "ping #{} t={} ms: time [{:.3}, {:.3}] ms",
            self.generated, frame.timestamp_ms, frame.noisy.front, frame.noisy.bottom
        );

        frame
    }

    fn step(&mut self, channel: Channel) {
        let step = self.config.step_m;
        let d = &mut self.distance[channel as usize];
        *d += self.rng.gen_range(step.min..=step.max);
        if *d < self.config.min_distance_m {
            *d = self.config.min_distance_m;
        }
    }

    fn obstruction(&mut self, channel: Channel) -> Option<f32> {
        if self.rng.gen::<f32>() >= self.config.obstruction_chance {
            return None;
        }

        let base = match channel {
            Channel::Front => self.config.front_obstruction_base_m,
            Channel::Bottom => self.config.bottom_obstruction_base_m,
        };
        let span = self.config.obstruction_span_m;
        Some(base + self.rng.gen_range(span.min..=span.max) * self.config.obstruction_scale)
    }

    fn jitter_ms(&mut self) -> i32 {
        let noise = self.config.noise_ms;
        self.rng.gen_range(noise.min..=noise.max)
    }
}

impl Iterator for SonarSimulator {
    type Item = SimFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        Some(self.next_frame())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.generated) as usize;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

/// Yields the noisy pairs a sonar driver would deliver
impl Stream for SonarSimulator {
    type Item = SamplePair;
    type Error = StreamError<()>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        match Iterator::next(self) {
            Some(frame) => Ok(frame.noisy),
            None => Err(nb::Error::Other(StreamError::EndOfStream)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        Iterator::size_hint(self)
    }
}
