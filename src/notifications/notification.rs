// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct, its `Variant`, and the reasons a
//! toast can leave the queue.

use crate::domain::toast::ToastDuration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Unique identifier for a toast.
///
/// Issued by the manager from a monotonic counter, so ids are never reused
/// for the lifetime of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Success,
    Error,
    Warning,
    Info,
    #[default]
    Default,
}

/// Icon a renderer should show next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantIcon {
    CheckCircle,
    AlertCircle,
    AlertTriangle,
    Info,
}

impl Variant {
    /// Returns the icon for this variant. The default variant has none.
    #[must_use]
    pub fn icon(self) -> Option<VariantIcon> {
        match self {
            Variant::Success => Some(VariantIcon::CheckCircle),
            Variant::Error => Some(VariantIcon::AlertCircle),
            Variant::Warning => Some(VariantIcon::AlertTriangle),
            Variant::Info => Some(VariantIcon::Info),
            Variant::Default => None,
        }
    }

    /// Parses the kebab-case name used in requests and config files.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "success" => Some(Variant::Success),
            "error" => Some(Variant::Error),
            "warning" => Some(Variant::Warning),
            "info" => Some(Variant::Info),
            "default" => Some(Variant::Default),
            _ => None,
        }
    }
}

/// Why a toast left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// Its auto-dismiss timer elapsed.
    Timer,
    /// It was removed explicitly, usually by the user closing it.
    User,
    /// A newer toast pushed it out of the capacity window.
    Evicted,
    /// The whole queue was cleared.
    Cleared,
}

/// Callback attached to a toast, shown as a button by the renderer.
///
/// Running the action never changes the queue.
#[derive(Clone)]
pub struct ToastAction {
    label: String,
    callback: Arc<dyn Fn() + Send + Sync>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Arc::new(callback),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the callback.
    pub fn invoke(&self) {
        (self.callback)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A toast held by the queue.
///
/// Toasts are immutable once queued; replace one by removing it and adding
/// a new toast.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    message: String,
    variant: Variant,
    duration: ToastDuration,
    action: Option<ToastAction>,
    created_at: Instant,
}

impl Toast {
    pub(crate) fn new(
        id: ToastId,
        message: String,
        variant: Variant,
        duration: ToastDuration,
        action: Option<ToastAction>,
    ) -> Self {
        Self {
            id,
            message,
            variant,
            duration,
            action,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the resolved auto-dismiss delay.
    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this toast, measured on the same clock as its
    /// auto-dismiss timer.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns true if this toast stays until dismissed explicitly.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_persistent()
    }
}
