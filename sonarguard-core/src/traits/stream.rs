//! Stream Processing Traits
//!
//! Pull-based streams of sonar frames using the `nb` crate for non-blocking
//! I/O, so the same code runs under an RTOS poll loop or a desktop replay
//! without an async runtime.
//!
//! ## Common Patterns
//!
//! ```rust
//! use sonarguard_core::traits::Stream;
//! use sonarguard_core::stream::StreamError;
//!
//! fn drain<S: Stream<Error = StreamError<()>>>(stream: &mut S) -> usize {
//!     let mut count = 0;
//!     loop {
//!         match stream.poll_next() {
//!             Ok(_item) => count += 1,
//!             // Nothing yet, come back on the next tick
//!             Err(nb::Error::WouldBlock) => return count,
//!             Err(nb::Error::Other(_)) => return count,
//!         }
//!     }
//! }
//! ```

/// Core stream trait for frame sources
///
/// ## Error Handling
///
/// Streams use a two-level error model:
/// - `nb::Error::WouldBlock` - Temporary unavailability
/// - `nb::Error::Other(E)` - Actual stream errors, including end of stream
pub trait Stream {
    /// Type of items produced by the stream
    type Item;

    /// Type of errors that can occur
    type Error;

    /// Attempt to pull the next item from the stream
    ///
    /// ## Contract
    ///
    /// - Must not block
    /// - Repeated `WouldBlock` returns are normal
    /// - After a non-terminal error the stream may still be usable
    /// - End of stream is sticky
    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error>;

    /// Returns bounds on remaining items
    ///
    /// Default implementation returns `(0, None)` indicating unknown size.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        (**self).poll_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}
