//! Timeout diagnostics
//!
//! A raw reading equal to the timeout sentinel is reported through a
//! [`DiagnosticSink`] before the reading is processed. The report is
//! advisory; the reading still enters the window.
//!
//! Sinks provided here:
//!
//! - [`LogDiagnostics`]: `log::warn!` on std, `defmt::warn!` on embedded
//! - [`TimeoutCounter`]: per-channel totals
//! - [`TimeoutLog`]: the most recent events in a fixed-capacity ring
//!
//! ```rust
//! use sonarguard_core::{WindowedOutlierFilter, diagnostics::TimeoutCounter};
//!
//! let mut filter = WindowedOutlierFilter::<_, 5>::with_sink(TimeoutCounter::default());
//! filter.ingest(-1.0, 12.0);
//! filter.ingest(-1.0, -1.0);
//!
//! assert_eq!(filter.sink().front(), 2);
//! assert_eq!(filter.sink().bottom(), 1);
//! ```

use heapless::Deque;

use crate::constants::buffers::DEFAULT_TIMEOUT_LOG_SIZE;
use crate::errors::FilterError;
use crate::sample::Channel;

/// One timeout occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutEvent {
    /// Channel that reported the sentinel
    pub channel: Channel,
    /// Zero-based index of the ingestion that carried it
    pub sample_index: u64,
}

impl TimeoutEvent {
    /// Error form, for sinks that forward into error channels
    pub fn as_error(&self) -> FilterError {
        FilterError::SensorTimeout { channel: self.channel }
    }
}

/// Receiver for filter diagnostics
pub trait DiagnosticSink {
    /// Called once per channel reading equal to the timeout sentinel
    fn sensor_timeout(&mut self, event: TimeoutEvent);
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &mut D {
    fn sensor_timeout(&mut self, event: TimeoutEvent) {
        (**self).sensor_timeout(event)
    }
}

/// Discards every diagnostic
impl DiagnosticSink for () {
    fn sensor_timeout(&mut self, _event: TimeoutEvent) {}
}

/// Routes diagnostics to the logging backend
///
/// Warns once per timed-out channel. A ping where both channels time out
/// produces two warnings sharing one sample index, not a single
/// "sensor timed out" line per pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    #[allow(unused_variables)]
    fn sensor_timeout(&mut self, event: TimeoutEvent) {
        log_warn!(
            "{} (sample #{})",
            event.as_error(),
            event.sample_index
        );

        #[cfg(feature = "defmt")]
        defmt::warn!("{} (sample #{})", event.as_error(), event.sample_index);
    }
}

/// Counts timeouts per channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeoutCounter {
    front: u32,
    bottom: u32,
}

impl TimeoutCounter {
    /// Front-channel timeouts seen
    pub fn front(&self) -> u32 {
        self.front
    }

    /// Bottom-channel timeouts seen
    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    /// Timeouts seen on `channel`
    pub fn count(&self, channel: Channel) -> u32 {
        match channel {
            Channel::Front => self.front,
            Channel::Bottom => self.bottom,
        }
    }

    /// Timeouts across both channels
    pub fn total(&self) -> u32 {
        self.front.saturating_add(self.bottom)
    }
}

impl DiagnosticSink for TimeoutCounter {
    fn sensor_timeout(&mut self, event: TimeoutEvent) {
        match event.channel {
            Channel::Front => self.front = self.front.saturating_add(1),
            Channel::Bottom => self.bottom = self.bottom.saturating_add(1),
        }
    }
}

/// Keeps the most recent `CAP` timeout events
///
/// When full, the oldest event is dropped to make room.
#[derive(Debug, Clone, Default)]
pub struct TimeoutLog<const CAP: usize = DEFAULT_TIMEOUT_LOG_SIZE> {
    events: Deque<TimeoutEvent, CAP>,
    dropped: u64,
}

impl<const CAP: usize> TimeoutLog<CAP> {
    /// Empty log
    pub fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Events from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &TimeoutEvent> + '_ {
        self.events.iter()
    }

    /// Events currently held
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// No events held
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent event
    pub fn latest(&self) -> Option<&TimeoutEvent> {
        self.events.back()
    }

    /// Events evicted because the log was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Forget every event and reset the drop count
    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }
}

impl<const CAP: usize> DiagnosticSink for TimeoutLog<CAP> {
    fn sensor_timeout(&mut self, event: TimeoutEvent) {
        if CAP == 0 {
            self.dropped += 1;
            return;
        }

        if self.events.is_full() {
            self.events.pop_front();
            self.dropped += 1;
        }
        // Room was made above
        let _ = self.events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(channel: Channel, sample_index: u64) -> TimeoutEvent {
        TimeoutEvent { channel, sample_index }
    }

    #[test]
    fn counter_tracks_channels() {
        let mut counter = TimeoutCounter::default();
        counter.sensor_timeout(event(Channel::Front, 0));
        counter.sensor_timeout(event(Channel::Front, 3));
        counter.sensor_timeout(event(Channel::Bottom, 3));

        assert_eq!(counter.count(Channel::Front), 2);
        assert_eq!(counter.count(Channel::Bottom), 1);
        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn log_evicts_oldest() {
        let mut log = TimeoutLog::<2>::new();
        for i in 0..3 {
            log.sensor_timeout(event(Channel::Bottom, i));
        }

        let indices: Vec<u64> = log.iter().map(|e| e.sample_index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(log.dropped(), 1);
        assert_eq!(log.latest().map(|e| e.sample_index), Some(2));
    }

    #[test]
    fn borrowed_sink_forwards() {
        fn report<D: DiagnosticSink>(mut sink: D) {
            sink.sensor_timeout(event(Channel::Front, 7));
        }

        let mut counter = TimeoutCounter::default();
        report(&mut counter);
        report(&mut counter);
        assert_eq!(counter.front(), 2);
    }

    #[test]
    fn double_timeout_reports_each_channel() {
        use crate::filter::WindowedOutlierFilter;

        let mut filter = WindowedOutlierFilter::<_, 5>::with_sink(TimeoutLog::<4>::new());
        filter.ingest(2.0, 2.0);
        filter.ingest(-1.0, -1.0);

        let events: Vec<TimeoutEvent> = filter.sink().iter().copied().collect();
        assert_eq!(events, vec![event(Channel::Front, 1), event(Channel::Bottom, 1)]);
    }

    #[test]
    fn event_converts_to_error() {
        let e = event(Channel::Front, 0);
        assert_eq!(e.as_error(), FilterError::SensorTimeout { channel: Channel::Front });
    }
}
