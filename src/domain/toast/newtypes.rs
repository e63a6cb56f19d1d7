// SPDX-License-Identifier: MPL-2.0
//! Toast queue newtypes.
//!
//! Type-safe wrappers for queue configuration values, ensuring they are
//! always within valid ranges.

use std::time::Duration;

// =============================================================================
// MaxVisible Bounds
// =============================================================================

/// Visible capacity bounds (1 to 100 toasts).
pub mod max_visible_bounds {
    /// Minimum capacity. Zero would evict every toast on insertion.
    pub const MIN: usize = 1;
    /// Maximum capacity.
    pub const MAX: usize = 100;
    /// Default capacity.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// MaxVisible
// =============================================================================

/// Maximum number of toasts held by the queue at once.
///
/// Values outside 1–100 are clamped, so the newest toast always survives
/// the eviction that follows an insertion.
///
/// # Example
///
/// ```
/// use toast_queue::domain::toast::MaxVisible;
///
/// assert_eq!(MaxVisible::new(3).value(), 3);
/// assert_eq!(MaxVisible::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_visible_bounds::MIN, max_visible_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= max_visible_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= max_visible_bounds::MAX
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}

// =============================================================================
// ToastDuration
// =============================================================================

/// Delay after which a toast dismisses itself.
///
/// A zero delay is the persistent marker: such a toast stays until it is
/// dismissed explicitly or evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastDuration(Duration);

impl ToastDuration {
    /// Never auto-dismiss.
    pub const PERSISTENT: Self = Self(Duration::ZERO);

    /// Default delay (5 seconds).
    pub const DEFAULT: Self = Self(Duration::from_millis(5000));

    /// Creates a duration from milliseconds. `0` is persistent.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Wraps an arbitrary duration. A zero duration is persistent.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Returns the delay in whole milliseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }

    /// Returns the delay before auto-dismiss, or `None` if persistent.
    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        if self.is_persistent() {
            None
        } else {
            Some(self.0)
        }
    }

    /// Returns true if the toast never auto-dismisses.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0.is_zero()
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Tests
// =============================================================================
