//! Synthetic sonar for SonarGuard
//!
//! Generates paired front/bottom round-trip times from a random-walk vehicle
//! model, with timing jitter, occasional obstructions and out-of-range
//! timeouts. Every frame carries the ground truth alongside the noisy
//! reading, so filter output can be scored against it.
//!
//! ```rust
//! use sonarguard_core::{FilterConfig, WindowedOutlierFilter};
//! use sonarguard_sim::{SimConfig, SonarSimulator};
//!
//! let config = SimConfig::default();
//! let divisor = config.round_trip_ms_per_meter();
//! let sim = SonarSimulator::seeded(config, 42).unwrap().with_limit(20);
//!
//! let mut filter = WindowedOutlierFilter::with_config(FilterConfig::new_with_divisor(divisor));
//! let outputs = sim.filter_map(|frame| filter.ingest_pair(frame.noisy)).count();
//! assert_eq!(outputs, 16);
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod simulator;

pub use config::{SimConfig, Span};
pub use errors::{SimError, SimResult};
pub use simulator::{distance_to_round_trip_ms, SimFrame, SonarSimulator};
