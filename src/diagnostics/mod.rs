// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the toast queue.
//!
//! The manager reports every toast it accepts, every dismissal with its
//! reason, and every request it rejects. Events travel over a bounded
//! channel into a memory-bounded ring buffer and can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped lifecycle event
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Owner and sender sides

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
