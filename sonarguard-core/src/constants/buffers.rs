//! Buffer Sizes
//!
//! All buffers are fixed at compile time. Sizes trade responsiveness against
//! noise rejection and RAM.

/// Sliding window length per channel.
///
/// Five pings is about 1-5 s of history at the 200-1000 ms ping interval.
/// Short enough to follow a descending vehicle, long enough that one spike
/// cannot drag the band with it.
pub const WINDOW_SIZE: usize = 5;

/// Default number of timeout events kept by `TimeoutLog`.
pub const DEFAULT_TIMEOUT_LOG_SIZE: usize = 16;

