//! Stream processing for sonar frames
//!
//! ## Module Organization
//!
//! - Core errors (this file)
//! - `memory` - Replay of recorded frames
//! - `filtered` - Adapter running a filter over any frame stream
//!
//! ```text
//! inbound Stream<Item = SamplePair>
//!          │ poll_next
//!          ▼
//!   FilteredStream ── PairFilter::ingest_pair
//!          │
//!          ▼
//! outbound Stream<Item = FilteredPair>
//! ```

use core::fmt;

use crate::errors::FilterError;

#[cfg(feature = "stream-memory")]
pub mod memory;

pub mod filtered;

#[cfg(feature = "stream-memory")]
pub use memory::MemoryStream;

pub use filtered::FilteredStream;

/// Errors that can occur during stream processing
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError<E> {
    /// Transport-level error (e.g., I/O error)
    Transport(E),
    /// Frame refused by a strict filter
    Rejected(FilterError),
    /// End of stream reached
    EndOfStream,
}

impl<E> StreamError<E> {
    /// Whether the stream will produce nothing further
    pub fn is_end(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }
}

impl<E> From<FilterError> for StreamError<E> {
    fn from(err: FilterError) -> Self {
        Self::Rejected(err)
    }
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::Rejected(e) => write!(f, "Rejected: {}", e),
            Self::EndOfStream => write!(f, "End of stream"),
        }
    }
}

// Re-export traits for convenience
pub use crate::traits::Stream;
