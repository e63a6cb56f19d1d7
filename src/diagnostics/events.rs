// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for toast lifecycle tracking.

use std::time::Instant;

use serde::Serialize;

use crate::notifications::{DismissReason, Variant};

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A toast entered the queue.
    ToastAdded {
        id: u64,
        variant: Variant,
        /// Resolved auto-dismiss delay; `0` for persistent toasts.
        duration_ms: u64,
    },

    /// A toast left the queue.
    ToastDismissed { id: u64, reason: DismissReason },

    /// A toast request was dropped at the boundary.
    InputRejected {
        /// Human-readable reason.
        message: String,
    },
}
