// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` is a bounded queue of toast notifications.
//!
//! It assigns ids, dismisses toasts after a delay on a tokio runtime, evicts
//! the oldest toasts once the queue is full, and exposes snapshots for a
//! rendering layer to draw.

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;
