//! Constants for SonarGuard Core
//!
//! Numeric values used by the filter and the simulator live here with their
//! units and origin, so no magic numbers appear in the processing code.
//!
//! ## Organization
//!
//! - **Sonar**: Acoustic propagation, unit conversion and the timeout sentinel
//! - **Buffers**: Window and diagnostic buffer sizes
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in the name (`_M`, `_MS`, `_M_PER_S`)
//! 3. Group related constants together

/// Acoustic constants, unit conversion and sensor sentinels.
pub mod sonar;

/// Window and diagnostic buffer sizes.
pub mod buffers;

pub use sonar::{
    RAW_TO_METERS_DIVISOR, TIMEOUT_SENTINEL, SPEED_OF_SOUND_WATER_M_PER_S,
    MAX_RANGE_M,
};

pub use buffers::{WINDOW_SIZE, DEFAULT_TIMEOUT_LOG_SIZE};
