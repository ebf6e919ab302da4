//! Error Types for the Sonar Outlier Filter
//!
//! ## Design Philosophy
//!
//! The filter runs once per sonar ping, so errors follow the same embedded
//! constraints as the rest of the core:
//!
//! 1. **Small Size**: Every variant carries at most two `usize` fields.
//!
//! 2. **No Heap Allocation**: No `String` payloads, only enums and integers.
//!
//! 3. **Copy Semantics**: Errors are `Copy` so they can be handed to
//!    diagnostic sinks and stream adapters without cloning.
//!
//! ## Error Categories
//!
//! ### Advisories
//! - `SensorTimeout`: A channel reported the timeout sentinel. Reported through
//!   the diagnostic sink, never returned from `ingest`.
//!
//! ### Startup State
//! - `InsufficientHistory`: The window has not filled yet. `ingest` turns this
//!   into `None`; only `band()` surfaces it directly.
//!
//! ### Rejected Input
//! - `InvalidValue`: NaN or infinite reading. Only produced by `try_ingest`,
//!   the hardened entry point. Plain `ingest` accepts every input.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use sonarguard_core::{FilterError, WindowedOutlierFilter};
//!
//! let mut filter = WindowedOutlierFilter::new();
//! match filter.try_ingest(f32::NAN, 12.0) {
//!     Ok(Some(_pair)) => {
//!         // publish_distance(pair);
//!     }
//!     Ok(None) => {
//!         // Window still filling
//!     }
//!     Err(FilterError::InvalidValue { channel }) => {
//!         // drop_frame(channel);
//!         let _ = channel;
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

use crate::sample::Channel;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// Channel reported the timeout sentinel
    #[error("Sensor timed out on {channel} channel")]
    SensorTimeout {
        /// Channel whose raw reading equalled the sentinel
        channel: Channel,
    },

    /// Window not yet full
    #[error("Insufficient history: need {required}, have {available}")]
    InsufficientHistory {
        /// Window capacity
        required: usize,
        /// Readings currently held
        available: usize,
    },

    /// Reading is NaN or infinite
    #[error("Invalid value on {channel} channel: not a finite number")]
    InvalidValue {
        /// Channel carrying the non-finite reading
        channel: Channel,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::SensorTimeout { channel } =>
                defmt::write!(fmt, "Sensor timed out on {}", channel.name()),
            Self::InsufficientHistory { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
            Self::InvalidValue { channel } =>
                defmt::write!(fmt, "Invalid value on {}", channel.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FilterError::SensorTimeout { channel: Channel::Front };
        assert_eq!(format!("{}", err), "Sensor timed out on front channel");

        let err = FilterError::InsufficientHistory { required: 5, available: 2 };
        assert_eq!(format!("{}", err), "Insufficient history: need 5, have 2");

        let err = FilterError::InvalidValue { channel: Channel::Bottom };
        assert_eq!(
            format!("{}", err),
            "Invalid value on bottom channel: not a finite number"
        );
    }

    #[test]
    fn errors_stay_small() {
        assert!(core::mem::size_of::<FilterError>() <= 24);
    }
}
