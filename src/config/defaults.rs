// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Visible toast capacity bounds
//! - **Duration**: Auto-dismiss delay
//! - **Diagnostics**: Diagnostic event buffer bounds

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of toasts kept on screen before the oldest is evicted.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Minimum visible capacity. A queue that holds nothing would drop every toast.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum visible capacity.
pub const MAX_MAX_VISIBLE: usize = 100;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default auto-dismiss delay in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Duration value meaning "never auto-dismiss".
pub const PERSISTENT_DURATION_MS: u64 = 0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
