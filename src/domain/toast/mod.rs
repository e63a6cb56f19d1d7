// SPDX-License-Identifier: MPL-2.0
//! Toast queue domain types.
//!
//! - [`MaxVisible`]: How many toasts the queue holds before evicting
//! - [`ToastDuration`]: Auto-dismiss delay, where zero means persistent

mod newtypes;

pub use newtypes::{max_visible_bounds, MaxVisible, ToastDuration};
