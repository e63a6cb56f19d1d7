// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`toast`]: Queue value objects ([`MaxVisible`](toast::MaxVisible),
//!   [`ToastDuration`](toast::ToastDuration))

pub mod diagnostics;
pub mod toast;
