//! Windowed Outlier Filter
//!
//! ## Overview
//!
//! Smooths the two sonar channels (front and bottom) independently. Each
//! channel keeps a sliding window of its last N readings in meters; every new
//! reading is clamped to one standard deviation around the window mean.
//!
//! ## Data Flow
//!
//! ```text
//! raw (front, bottom)
//!   │
//!   ├─ sentinel? ──► DiagnosticSink::sensor_timeout   (advisory only)
//!   │
//!   ├─ ÷ 1.481 ──► meters
//!   │
//!   ├─ push into channel windows (oldest evicted past N)
//!   │
//!   └─ both windows full? ── no ──► None
//!                          └ yes ─► clamp each channel ─► Some(FilteredPair)
//! ```
//!
//! ## Ordering
//!
//! The current reading is pushed *before* the band is computed, so the band
//! that judges a reading already contains it. A spike therefore widens its
//! own band and is pulled back only partway:
//!
//! ```text
//! window [1, 1, 1, 1, 5], current 5
//! mean 1.8, sd 1.6 → band [0.2, 3.4] → output 3.4
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use sonarguard_core::WindowedOutlierFilter;
//!
//! let mut filter = WindowedOutlierFilter::new();
//!
//! // Four pings warm the window up
//! for _ in 0..4 {
//!     assert!(filter.ingest(14.81, 7.405).is_none());
//! }
//!
//! // From the fifth on, every ping produces a distance pair
//! let pair = filter.ingest(14.81, 7.405).unwrap();
//! assert!((pair.front - 10.0).abs() < 1e-4);
//! assert!((pair.bottom - 5.0).abs() < 1e-4);
//! ```

use crate::buffer::{CircularBuffer, CircularBufferIter};
use crate::config::FilterConfig;
use crate::constants::buffers::WINDOW_SIZE;
use crate::diagnostics::{DiagnosticSink, LogDiagnostics, TimeoutEvent};
use crate::errors::{FilterError, FilterResult};
use crate::sample::{Channel, FilteredPair, SamplePair};
use crate::stats::OutlierBand;
use crate::traits::PairFilter;

/// Sliding window of converted readings for one channel
#[derive(Debug, Clone)]
pub struct ChannelHistory<const N: usize> {
    channel: Channel,
    window: CircularBuffer<N>,
}

impl<const N: usize> ChannelHistory<N> {
    /// Empty history for `channel`
    pub const fn new(channel: Channel) -> Self {
        Self {
            channel,
            window: CircularBuffer::new(),
        }
    }

    /// Channel this history belongs to
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Readings currently in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// No readings yet
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Window holds N readings
    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }

    /// Most recent reading in meters
    pub fn last(&self) -> Option<f32> {
        self.window.last()
    }

    /// Readings oldest to newest, in meters
    pub fn iter(&self) -> CircularBufferIter<'_, N> {
        self.window.iter()
    }

    /// Underlying ring buffer
    pub fn window(&self) -> &CircularBuffer<N> {
        &self.window
    }

    /// Current outlier band
    ///
    /// Fails with `InsufficientHistory` until the window holds N readings.
    pub fn band(&self) -> FilterResult<OutlierBand> {
        OutlierBand::from_full_history(&self.window)
    }

    fn push(&mut self, meters: f32) {
        self.window.push(meters);
    }

    fn clear(&mut self) {
        self.window.clear();
    }

    /// Clamp `current` against the band of the window it was just pushed into
    fn filter(&self, current: f32) -> FilterResult<f32> {
        Ok(self.band()?.clamp(current))
    }
}

/// Two-channel sliding-window outlier filter
///
/// ## Type Parameters
///
/// - `D`: where sensor-timeout diagnostics go. Defaults to the log backend.
/// - `N`: window length per channel. Must be at least 1; a zero-length
///   window fails to compile as soon as a filter is constructed.
///
/// ## Thread Safety
///
/// Ingestion takes `&mut self` and runs to completion, so one filter serves
/// one inbound stream. Share across threads behind a mutex if needed.
#[derive(Debug, Clone)]
pub struct WindowedOutlierFilter<D = LogDiagnostics, const N: usize = WINDOW_SIZE> {
    config: FilterConfig,
    front: ChannelHistory<N>,
    bottom: ChannelHistory<N>,
    sink: D,
    samples: u64,
}

impl WindowedOutlierFilter<LogDiagnostics, WINDOW_SIZE> {
    /// Five-sample filter logging timeouts through `log`
    pub fn new() -> Self {
        Self::with_sink(LogDiagnostics)
    }

    /// Five-sample filter with a custom conversion config
    pub fn with_config(config: FilterConfig) -> Self {
        Self::with_config_and_sink(config, LogDiagnostics)
    }
}

impl<D: DiagnosticSink, const N: usize> WindowedOutlierFilter<D, N> {
    const NON_EMPTY_WINDOW: () = assert!(N > 0, "outlier filter window must hold at least one sample");

    /// Filter with the default config reporting to `sink`
    pub fn with_sink(sink: D) -> Self {
        Self::with_config_and_sink(FilterConfig::default(), sink)
    }

    /// Filter with an explicit config and diagnostic sink
    pub fn with_config_and_sink(config: FilterConfig, sink: D) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY_WINDOW;

        Self {
            config,
            front: ChannelHistory::new(Channel::Front),
            bottom: ChannelHistory::new(Channel::Bottom),
            sink,
            samples: 0,
        }
    }

    /// Ingest one raw reading per channel
    ///
    /// Returns `None` while either window is still filling, and a filtered
    /// pair on every call after that. Timeouts are reported to the sink
    /// first; the sentinel reading is then processed like any other.
    pub fn ingest(&mut self, raw_front: f32, raw_bottom: f32) -> Option<FilteredPair> {
        self.ingest_pair(SamplePair::new(raw_front, raw_bottom))
    }

    /// Ingest a raw pair
    pub fn ingest_pair(&mut self, raw: SamplePair) -> Option<FilteredPair> {
        let sample_index = self.samples;
        self.samples += 1;

        for channel in Channel::ALL {
            if self.config.is_timeout(raw.get(channel)) {
                self.sink.sensor_timeout(TimeoutEvent { channel, sample_index });
            }
        }

        let config = self.config;
        let meters = raw.map(|_, value| config.to_meters(value));

        // Push before computing: the band includes the reading it judges
        self.front.push(meters.front);
        self.bottom.push(meters.bottom);

        let filtered = FilteredPair::new(
            self.front.filter(meters.front).ok()?,
            self.bottom.filter(meters.bottom).ok()?,
        );

        log_debug!(
            "sample #{}: raw [{}, {}] -> filtered [{:.3} m, {:.3} m]",
            sample_index, raw.front, raw.bottom, filtered.front, filtered.bottom
        );

        Some(filtered)
    }

    /// Ingest after rejecting NaN and infinite readings
    ///
    /// A rejected pair leaves the windows, the sample count and the sink
    /// untouched.
    pub fn try_ingest(&mut self, raw_front: f32, raw_bottom: f32) -> FilterResult<Option<FilteredPair>> {
        self.try_ingest_pair(SamplePair::new(raw_front, raw_bottom))
    }

    /// Pair form of [`try_ingest`](Self::try_ingest)
    pub fn try_ingest_pair(&mut self, raw: SamplePair) -> FilterResult<Option<FilteredPair>> {
        for channel in Channel::ALL {
            if !raw.get(channel).is_finite() {
                log_warn!("rejecting non-finite {} reading {}", channel, raw.get(channel));
                return Err(FilterError::InvalidValue { channel });
            }
        }

        Ok(self.ingest_pair(raw))
    }

    /// Both windows hold N readings
    pub fn is_ready(&self) -> bool {
        self.front.is_full() && self.bottom.is_full()
    }

    /// Front-channel history
    pub fn front(&self) -> &ChannelHistory<N> {
        &self.front
    }

    /// Bottom-channel history
    pub fn bottom(&self) -> &ChannelHistory<N> {
        &self.bottom
    }

    /// History for `channel`
    pub fn history(&self, channel: Channel) -> &ChannelHistory<N> {
        match channel {
            Channel::Front => &self.front,
            Channel::Bottom => &self.bottom,
        }
    }

    /// Current band for one channel
    pub fn band(&self, channel: Channel) -> FilterResult<OutlierBand> {
        self.history(channel).band()
    }

    /// Window length
    pub const fn window_size(&self) -> usize {
        N
    }

    /// Pairs accepted since construction
    ///
    /// Not cleared by [`reset`](Self::reset), so timeout event indices stay
    /// unique for the life of the filter.
    pub fn samples_ingested(&self) -> u64 {
        self.samples
    }

    /// Drop both windows; the next N pairs warm the filter up again
    pub fn reset(&mut self) {
        self.front.clear();
        self.bottom.clear();
    }

    /// Active conversion config
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Diagnostic sink
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Mutable diagnostic sink, e.g. to drain a `TimeoutLog`
    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    /// Consume the filter, keeping the sink
    pub fn into_sink(self) -> D {
        self.sink
    }
}

impl<D: DiagnosticSink + Default, const N: usize> Default for WindowedOutlierFilter<D, N> {
    fn default() -> Self {
        Self::with_sink(D::default())
    }
}

impl<D: DiagnosticSink, const N: usize> PairFilter for WindowedOutlierFilter<D, N> {
    fn ingest_pair(&mut self, raw: SamplePair) -> Option<FilteredPair> {
        WindowedOutlierFilter::ingest_pair(self, raw)
    }

    fn try_ingest_pair(&mut self, raw: SamplePair) -> FilterResult<Option<FilteredPair>> {
        WindowedOutlierFilter::try_ingest_pair(self, raw)
    }

    fn is_ready(&self) -> bool {
        WindowedOutlierFilter::is_ready(self)
    }

    fn reset(&mut self) {
        WindowedOutlierFilter::reset(self)
    }
}
