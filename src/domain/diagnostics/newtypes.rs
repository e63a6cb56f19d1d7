// SPDX-License-Identifier: MPL-2.0
//! Bounds for the in-memory diagnostic event buffer.

/// Diagnostic buffer bounds (10 to 10000 events).
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 10;
    pub const MAX: usize = 10_000;
    pub const DEFAULT: usize = 500;
}

/// Number of diagnostic events retained before the oldest are dropped.
///
/// # Example
///
/// ```
/// use toast_queue::domain::diagnostics::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(1000).value(), 1000);
/// assert_eq!(BufferCapacity::new(3).value(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping into `MIN..=MAX`.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        MIN_DIAGNOSTICS_BUFFER_CAPACITY,
    };

    #[test]
    fn bounds_match_config_constants() {
        assert_eq!(buffer_capacity_bounds::MIN, MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(buffer_capacity_bounds::MAX, MAX_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(
            buffer_capacity_bounds::DEFAULT,
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(BufferCapacity::new(0).value(), 10);
        assert_eq!(BufferCapacity::new(1_000_000).value(), 10_000);
        assert_eq!(BufferCapacity::new(64).value(), 64);
    }
}
