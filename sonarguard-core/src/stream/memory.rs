//! Memory-based streams for testing and replay
//!
//! Feeds recorded sonar frames (for example a dive log loaded from disk)
//! through the same code path as live data.

use crate::sample::SamplePair;
use super::{Stream, StreamError};

/// Replays a slice of raw frames
///
/// ```rust
/// use sonarguard_core::stream::{MemoryStream, Stream, StreamError};
/// use sonarguard_core::SamplePair;
///
/// let frames = [SamplePair::new(12.0, 6.0), SamplePair::new(12.1, 6.1)];
/// let mut stream = MemoryStream::new(&frames);
///
/// assert_eq!(stream.poll_next(), Ok(SamplePair::new(12.0, 6.0)));
/// assert_eq!(stream.poll_next(), Ok(SamplePair::new(12.1, 6.1)));
/// assert_eq!(stream.poll_next(), Err(nb::Error::Other(StreamError::EndOfStream)));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStream<'a> {
    frames: &'a [SamplePair],
    position: usize,
}

impl<'a> MemoryStream<'a> {
    /// Stream over `frames`, starting at the first
    pub fn new(frames: &'a [SamplePair]) -> Self {
        Self {
            frames,
            position: 0,
        }
    }

    /// Rewind to the first frame
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Index of the next frame
    pub fn position(&self) -> usize {
        self.position
    }

    /// Every frame has been yielded
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.frames.len()
    }
}

impl<'a> Stream for MemoryStream<'a> {
    type Item = SamplePair;
    type Error = StreamError<()>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        let frame = self
            .frames
            .get(self.position)
            .copied()
            .ok_or(nb::Error::Other(StreamError::EndOfStream))?;

        self.position += 1;
        Ok(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frames.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_stream_basic() {
        let frames = [
            SamplePair::new(10.0, 5.0),
            SamplePair::new(10.5, 5.2),
        ];
        let mut stream = MemoryStream::new(&frames);
        assert_eq!(stream.size_hint(), (2, Some(2)));

        assert_eq!(stream.poll_next().unwrap(), frames[0]);
        assert_eq!(stream.poll_next().unwrap(), frames[1]);
        assert!(stream.is_exhausted());

        // End of stream is sticky
        for _ in 0..3 {
            assert!(matches!(
                stream.poll_next(),
                Err(nb::Error::Other(StreamError::EndOfStream))
            ));
        }
    }

    #[test]
    fn reset_replays() {
        let frames = [SamplePair::new(1.0, 2.0)];
        let mut stream = MemoryStream::new(&frames);
        stream.poll_next().unwrap();

        stream.reset();
        assert_eq!(stream.position(), 0);
        assert_eq!(stream.poll_next().unwrap(), frames[0]);
    }
}
