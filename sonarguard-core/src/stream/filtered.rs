//! Filtering adapter over raw frame streams
//!
//! Pulls raw pairs from an inbound stream, runs them through a
//! [`PairFilter`] and yields filtered pairs. Warm-up frames are consumed
//! silently, so the first item appears after the filter's window fills.

use crate::sample::{FilteredPair, SamplePair};
use crate::traits::PairFilter;
use super::{Stream, StreamError};

/// Stream of filtered pairs driven by an inbound raw stream
///
/// ```rust
/// use sonarguard_core::stream::{FilteredStream, MemoryStream, Stream};
/// use sonarguard_core::{SamplePair, WindowedOutlierFilter};
///
/// let frames = [SamplePair::new(14.81, 7.405); 6];
/// let mut stream = FilteredStream::new(MemoryStream::new(&frames), WindowedOutlierFilter::new());
///
/// // Six frames through a five-sample window give two outputs
/// assert!(stream.poll_next().is_ok());
/// assert!(stream.poll_next().is_ok());
/// assert!(stream.poll_next().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FilteredStream<S, F> {
    inner: S,
    filter: F,
    strict: bool,
    ended: bool,
    consumed: u64,
}

impl<S, F> FilteredStream<S, F> {
    /// Lenient adapter: every frame goes to `ingest_pair`
    pub fn new(inner: S, filter: F) -> Self {
        Self {
            inner,
            filter,
            strict: false,
            ended: false,
            consumed: 0,
        }
    }

    /// Reject non-finite frames with `StreamError::Rejected` instead of
    /// feeding them to the filter
    ///
    /// A rejected frame is skipped; the stream stays usable.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Whether non-finite frames are rejected
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Raw frames pulled from the inbound stream so far
    pub fn frames_consumed(&self) -> u64 {
        self.consumed
    }

    /// Wrapped filter
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Wrapped filter, mutably
    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    /// Inbound stream
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Split back into stream and filter
    pub fn into_parts(self) -> (S, F) {
        (self.inner, self.filter)
    }
}

impl<S, F, E> Stream for FilteredStream<S, F>
where
    S: Stream<Item = SamplePair, Error = StreamError<E>>,
    F: PairFilter,
{
    type Item = FilteredPair;
    type Error = StreamError<E>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        if self.ended {
            return Err(nb::Error::Other(StreamError::EndOfStream));
        }

        loop {
            let raw = match self.inner.poll_next() {
                Ok(raw) => raw,
                Err(nb::Error::Other(StreamError::EndOfStream)) => {
                    self.ended = true;
                    return Err(nb::Error::Other(StreamError::EndOfStream));
                }
                Err(e) => return Err(e),
            };
            self.consumed += 1;

            let filtered = if self.strict {
                self.filter
                    .try_ingest_pair(raw)
                    .map_err(|e| nb::Error::Other(StreamError::Rejected(e)))?
            } else {
                self.filter.ingest_pair(raw)
            };

            if let Some(pair) = filtered {
                return Ok(pair);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.ended {
            return (0, Some(0));
        }
        // Warm-up may swallow some of the inbound frames
        (0, self.inner.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FilterError;
    use crate::filter::WindowedOutlierFilter;
    use crate::sample::Channel;
    use crate::stream::MemoryStream;

    /// Yields `WouldBlock` every other poll
    struct Bursty<'a> {
        frames: MemoryStream<'a>,
        ready: bool,
    }

    impl<'a> Stream for Bursty<'a> {
        type Item = SamplePair;
        type Error = StreamError<()>;

        fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
            self.ready = !self.ready;
            if !self.ready {
                return Err(nb::Error::WouldBlock);
            }
            self.frames.poll_next()
        }
    }

    #[test]
    fn swallows_warm_up_frames() {
        let frames = [SamplePair::new(3.0, 3.0); 7];
        let mut stream = FilteredStream::new(MemoryStream::new(&frames), WindowedOutlierFilter::new());

        let mut outputs = 0;
        while stream.poll_next().is_ok() {
            outputs += 1;
        }

        assert_eq!(outputs, 3);
        assert_eq!(stream.frames_consumed(), 7);
        assert!(matches!(
            stream.poll_next(),
            Err(nb::Error::Other(StreamError::EndOfStream))
        ));
    }

    #[test]
    fn would_block_propagates() {
        let frames = [SamplePair::new(3.0, 3.0); 5];
        let inner = Bursty { frames: MemoryStream::new(&frames), ready: false };
        let mut stream = FilteredStream::new(inner, WindowedOutlierFilter::new());

        let mut blocked = 0;
        let result = loop {
            match stream.poll_next() {
                Err(nb::Error::WouldBlock) => blocked += 1,
                other => break other,
            }
        };

        assert!(result.is_ok());
        assert_eq!(blocked, 4);
    }

    #[test]
    fn strict_mode_rejects_and_continues() {
        let frames = [
            SamplePair::new(3.0, 3.0),
            SamplePair::new(f32::NAN, 3.0),
            SamplePair::new(3.0, 3.0),
            SamplePair::new(3.0, 3.0),
            SamplePair::new(3.0, 3.0),
            SamplePair::new(3.0, 3.0),
        ];
        let mut stream =
            FilteredStream::new(MemoryStream::new(&frames), WindowedOutlierFilter::new()).strict();

        assert_eq!(
            stream.poll_next(),
            Err(nb::Error::Other(StreamError::Rejected(FilterError::InvalidValue {
                channel: Channel::Front,
            })))
        );
        assert!(stream.poll_next().is_ok());
        assert_eq!(stream.filter().front().len(), 5);
    }

    #[test]
    fn lenient_mode_feeds_everything() {
        let frames = [SamplePair::new(f32::NAN, 3.0); 5];
        let mut stream = FilteredStream::new(MemoryStream::new(&frames), WindowedOutlierFilter::new());

        let out = stream.poll_next().unwrap();
        assert!(out.front.is_nan());
        assert!((out.bottom - 3.0 / 1.481).abs() < 1e-6);
    }

    #[test]
    fn borrowed_filter_keeps_state() {
        let frames = [SamplePair::new(2.0, 2.0); 5];
        let mut filter = WindowedOutlierFilter::new();
        {
            let mut stream = FilteredStream::new(MemoryStream::new(&frames), &mut filter);
            assert!(stream.poll_next().is_ok());
        }
        assert!(filter.is_ready());
        assert!(filter.ingest(2.0, 2.0).is_some());
    }
}
