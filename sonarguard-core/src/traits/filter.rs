//! Pair filter interface
//!
//! The filter seam between transports and the filtering algorithm. Anything
//! that turns raw sonar frames into distance estimates can sit behind it,
//! which is what lets `FilteredStream` stay independent of window size and
//! diagnostic sink.

use crate::errors::FilterResult;
use crate::sample::{FilteredPair, SamplePair};

/// Stateful filter over paired sonar readings
pub trait PairFilter {
    /// Ingest a raw pair, returning a filtered pair once enough history exists
    ///
    /// Every input is accepted. `None` means the filter is still warming up.
    fn ingest_pair(&mut self, raw: SamplePair) -> Option<FilteredPair>;

    /// Like [`ingest_pair`](Self::ingest_pair), but rejects non-finite
    /// readings without touching filter state
    fn try_ingest_pair(&mut self, raw: SamplePair) -> FilterResult<Option<FilteredPair>>;

    /// Whether every channel window is full
    fn is_ready(&self) -> bool;

    /// Drop all history
    fn reset(&mut self);
}

impl<F: PairFilter + ?Sized> PairFilter for &mut F {
    fn ingest_pair(&mut self, raw: SamplePair) -> Option<FilteredPair> {
        (**self).ingest_pair(raw)
    }

    fn try_ingest_pair(&mut self, raw: SamplePair) -> FilterResult<Option<FilteredPair>> {
        (**self).try_ingest_pair(raw)
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
