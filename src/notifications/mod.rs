// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Toasts are short messages shown on top of an application that go away on
//! their own after a delay, or when the user closes them. The queue keeps
//! them in insertion order and holds at most `max_visible` at once, evicting
//! the oldest first.
//!
//! # Components
//!
//! - [`notification`] - `Toast`, `Variant`, `ToastId` and dismissal reasons
//! - [`input`] - `ToastInput` requests, typed or from JSON
//! - [`settings`] - `ToastSettings` supplied at construction
//! - [`manager`] - `Manager`, the queue itself
//!
//! # Usage
//!
//! ```
//! use toast_queue::notifications::{Manager, ToastInput, ToastSettings};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> toast_queue::error::Result<()> {
//! let manager = Manager::try_current(ToastSettings::default())?;
//!
//! let id = manager.add_toast(ToastInput::success("Image saved").duration_ms(3000));
//! assert_eq!(manager.get_active()[0].id(), id);
//!
//! // A renderer watches for changes instead of polling.
//! let snapshots = manager.subscribe();
//! assert_eq!(snapshots.borrow().len(), 1);
//!
//! manager.remove_toast(id);
//! # Ok(())
//! # }
//! ```

pub mod input;
pub mod manager;
pub mod notification;
pub mod settings;

pub use input::ToastInput;
pub use manager::{Manager, Message as ToastMessage};
pub use notification::{DismissReason, Toast, ToastAction, ToastId, Variant, VariantIcon};
pub use settings::ToastSettings;
