// SPDX-License-Identifier: MPL-2.0
//! Construction-time settings for the toast manager.

use crate::config::{Config, ToastPosition, ToastsConfig};
use crate::domain::toast::{MaxVisible, ToastDuration};

/// Validated settings a [`Manager`](super::Manager) is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToastSettings {
    /// Capacity of the queue.
    pub max_visible: MaxVisible,
    /// Delay applied to toasts that do not set their own.
    pub default_duration: ToastDuration,
    /// Where a renderer should anchor the stack.
    pub position: ToastPosition,
}

impl ToastSettings {
    #[must_use]
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = MaxVisible::new(max_visible);
        self
    }

    #[must_use]
    pub fn with_default_duration_ms(mut self, millis: u64) -> Self {
        self.default_duration = ToastDuration::from_millis(millis);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }
}

impl From<&ToastsConfig> for ToastSettings {
    fn from(config: &ToastsConfig) -> Self {
        Self {
            max_visible: MaxVisible::new(config.max_visible),
            default_duration: ToastDuration::from_millis(config.default_duration_ms),
            position: config.position,
        }
    }
}

impl From<&Config> for ToastSettings {
    fn from(config: &Config) -> Self {
        Self::from(&config.toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let from_config = ToastSettings::from(&Config::default());
        assert_eq!(from_config, ToastSettings::default());
        assert_eq!(from_config.max_visible.value(), 5);
        assert_eq!(from_config.default_duration.as_millis(), 5000);
        assert_eq!(from_config.position, ToastPosition::TopRight);
    }

    #[test]
    fn config_capacity_is_clamped() {
        let config = ToastsConfig {
            max_visible: 0,
            ..ToastsConfig::default()
        };
        assert_eq!(ToastSettings::from(&config).max_visible.value(), 1);
    }

    #[test]
    fn builder_methods_override_fields() {
        let settings = ToastSettings::default()
            .with_max_visible(2)
            .with_default_duration_ms(0)
            .with_position(ToastPosition::BottomLeft);

        assert_eq!(settings.max_visible.value(), 2);
        assert!(settings.default_duration.is_persistent());
        assert_eq!(settings.position, ToastPosition::BottomLeft);
    }
}
