//! Core filtering engine for SonarGuard
//!
//! Smooths paired sonar range readings (front and bottom transducers) with a
//! sliding-window outlier clamp. Designed for vehicle computers and
//! microcontrollers alike.
//!
//! Key constraints:
//! - No heap allocation
//! - O(N) work per ping, N = window length
//! - Transport-agnostic: feed it from any bus, publish its output anywhere
//!
//! ```no_run
//! use sonarguard_core::WindowedOutlierFilter;
//!
//! let mut filter = WindowedOutlierFilter::new();
//!
//! // Raw round-trip readings from the sonar driver
//! # let frames: [(f32, f32); 0] = [];
//! for (front, bottom) in frames {
//!     if let Some(distance) = filter.ingest(front, bottom) {
//!         // publish(distance.front, distance.bottom);
//!         let _ = distance;
//!     }
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(test, deny(missing_docs))]

#[macro_use]
mod macros;

pub mod buffer;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod errors;
pub mod filter;
pub mod sample;
pub mod stats;
pub mod stream;
pub mod traits;

// Public API
pub use config::FilterConfig;
pub use diagnostics::{DiagnosticSink, LogDiagnostics, TimeoutCounter, TimeoutEvent, TimeoutLog};
pub use errors::{FilterError, FilterResult};
pub use filter::{ChannelHistory, WindowedOutlierFilter};
pub use sample::{Channel, FilteredPair, SamplePair};
pub use stats::OutlierBand;
pub use traits::{PairFilter, Stream};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
