//! Sonar Propagation and Conversion Constants
//!
//! Values for a pair of single-beam echo sounders on an underwater vehicle,
//! one looking forward and one looking down.

// ===== ACOUSTICS =====

/// Nominal speed of sound in water (m/s).
///
/// Varies roughly 1450-1570 m/s with temperature, salinity and depth.
/// 1481 m/s is the fresh-water value at 20°C and the reference used when
/// generating round-trip times.
pub const SPEED_OF_SOUND_WATER_M_PER_S: f32 = 1481.0;

/// Maximum range of the transducers (m).
///
/// Echoes from further away are not received before the ping times out, and
/// the sensor reports [`TIMEOUT_SENTINEL`] instead.
pub const MAX_RANGE_M: f32 = 23.0;

/// Closest distance the vehicle is allowed to drift to an obstacle (m).
pub const MIN_STANDOFF_M: f32 = 0.2;

// ===== CONVERSION =====

/// Divisor converting raw sensor readings to meters.
///
/// The reference propagation-speed ratio (1481 m/s / 1000). Applied as
/// `meters = raw / RAW_TO_METERS_DIVISOR`, so a raw reading of 1.481 is
/// exactly one meter.
pub const RAW_TO_METERS_DIVISOR: f32 = 1.481;

/// Milliseconds per second, used for round-trip time conversion.
pub const MS_PER_SECOND: f32 = 1000.0;

// ===== SENTINELS =====

/// Raw reading reported when a ping times out.
///
/// Still converted and windowed like a normal reading; its only special
/// treatment is the timeout diagnostic.
pub const TIMEOUT_SENTINEL: f32 = -1.0;
