//! Fixed-Size Circular Buffer for Channel History
//!
//! ## Overview
//!
//! Each sonar channel keeps the last N converted readings. The buffer is a
//! ring with a compile-time capacity, so a filter's memory footprint is known
//! up front and nothing is allocated per ping.
//!
//! ## Eviction
//!
//! Pushing into a full buffer overwrites the oldest reading. This is the
//! sliding-window behaviour the outlier band needs: after N pushes the window
//! always holds exactly the N most recent readings.
//!
//! ```text
//! CircularBuffer<5> after 7 pushes (r0..r6):
//! ┌────┬────┬────┬────┬────┐
//! │ r5 │ r6 │ r2 │ r3 │ r4 │  ← physical slots
//! └────┴────┴────┴────┴────┘
//!             ↑
//!             └── write_pos = 2, also the oldest reading
//!
//! Logical view (iter): r2, r3, r4, r5, r6
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use sonarguard_core::buffer::CircularBuffer;
//!
//! let mut window: CircularBuffer<3> = CircularBuffer::new();
//! for reading in [1.0, 2.0, 3.0, 4.0] {
//!     window.push(reading);
//! }
//!
//! assert!(window.is_full());
//! assert_eq!(window.last(), Some(4.0));
//! assert_eq!(window.iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
//! ```

/// Fixed-size circular buffer of channel readings
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - `len <= N`
/// - Iteration yields readings oldest to newest
///
/// Slots past `len` hold stale zeros and are never read.
#[derive(Debug, Clone)]
pub struct CircularBuffer<const N: usize> {
    data: [f32; N],

    /// Index where the next write will occur
    write_pos: usize,

    /// Current number of valid readings
    len: usize,
}

impl<const N: usize> CircularBuffer<N> {
    /// Creates a new empty circular buffer
    ///
    /// ```rust
    /// use sonarguard_core::buffer::CircularBuffer;
    /// static EMPTY: CircularBuffer<5> = CircularBuffer::new();
    /// ```
    pub const fn new() -> Self {
        Self {
            data: [0.0; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds a reading, overwriting the oldest when full
    pub fn push(&mut self, reading: f32) {
        self.data[self.write_pos] = reading;
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Get number of stored readings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Window capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Get the most recent reading
    pub fn last(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }

        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        Some(self.data[idx])
    }

    /// Get the oldest reading
    pub fn first(&self) -> Option<f32> {
        self.get(0)
    }

    /// Iterate over readings from oldest to newest
    pub fn iter(&self) -> CircularBufferIter<'_, N> {
        CircularBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Clear all readings
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }

    /// Gets a reading by its logical index (0 = oldest, len-1 = newest)
    ///
    /// Until the buffer wraps, logical and physical indices match. Once full,
    /// the oldest reading sits at `write_pos`:
    ///
    /// ```text
    /// Physical array:  [D, E, A, B, C]  (write_pos = 2)
    /// Logical view:    [A, B, C, D, E]
    /// logical[i] = physical[(write_pos + i) % N]
    /// ```
    pub fn get(&self, index: usize) -> Option<f32> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        Some(self.data[actual_index])
    }
}

/// Iterator over circular buffer contents
#[derive(Clone)]
pub struct CircularBufferIter<'a, const N: usize> {
    buffer: &'a CircularBuffer<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for CircularBufferIter<'a, N> {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, const N: usize> ExactSizeIterator for CircularBufferIter<'a, N> {}

impl<'a, const N: usize> IntoIterator for &'a CircularBuffer<N> {
    type Item = f32;
    type IntoIter = CircularBufferIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> Default for CircularBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
