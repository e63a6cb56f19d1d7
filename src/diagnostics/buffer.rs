// SPDX-License-Identifier: MPL-2.0
//! Ring buffer for diagnostic events.
//!
//! Holds at most `capacity` items; pushing into a full buffer drops the
//! oldest one.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Fixed-capacity FIFO buffer, oldest first.
///
/// # Example
///
/// ```
/// use toast_queue::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<u32> = CircularBuffer::new(BufferCapacity::new(10));
/// for i in 0..12 {
///     buffer.push(i);
/// }
/// assert_eq!(buffer.len(), 10);
/// assert_eq!(buffer.iter().next(), Some(&2));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1). Handy for
    /// tests that need tiny buffers.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `item`, returning the entry that was dropped to make room.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.data.len() >= self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
