// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for toast lifecycle events.
//!
//! The manager reports through a [`DiagnosticsHandle`]; the application
//! owns the [`DiagnosticsCollector`] and drains it on its own schedule.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use crate::error::Error;
use crate::notifications::{DismissReason, Toast, ToastId};

/// Events buffered in the channel before new ones are dropped.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to share across threads. Every method is
/// non-blocking: when the channel is full or the collector is gone, the
/// event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_toast_added(&self, toast: &Toast) {
        self.send(DiagnosticEventKind::ToastAdded {
            id: toast.id().as_u64(),
            variant: toast.variant(),
            duration_ms: toast.duration().as_millis(),
        });
    }

    pub fn log_toast_dismissed(&self, id: ToastId, reason: DismissReason) {
        self.send(DiagnosticEventKind::ToastDismissed {
            id: id.as_u64(),
            reason,
        });
    }

    pub fn log_input_rejected(&self, error: &Error) {
        self.send(DiagnosticEventKind::InputRejected {
            message: error.to_string(),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central store for diagnostic events.
///
/// Events arrive through a bounded channel and land in a memory-bounded
/// [`CircularBuffer`] when [`process_pending`](Self::process_pending) runs.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports the stored events as pretty JSON, with timestamps relative
    /// to collector creation.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    #[allow(clippy::cast_possible_truncation)] // Millisecond offsets fit comfortably in u64
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<ReportEvent<'_>> = self
            .buffer
            .iter()
            .map(|event| ReportEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis() as u64,
                kind: &event.kind,
            })
            .collect();

        let report = Report {
            started_at: self.started_at_utc.to_rfc3339(),
            collection_duration_ms: self.started_at.elapsed().as_millis() as u64,
            event_count: events.len(),
            events,
        };
        serde_json::to_string_pretty(&report)
    }
}

#[derive(Serialize)]
struct Report<'a> {
    started_at: String,
    collection_duration_ms: u64,
    event_count: usize,
    events: Vec<ReportEvent<'a>>,
}

#[derive(Serialize)]
struct ReportEvent<'a> {
    offset_ms: u64,
    #[serde(flatten)]
    kind: &'a DiagnosticEventKind,
}
