// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: How many diagnostic events are kept in memory

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
