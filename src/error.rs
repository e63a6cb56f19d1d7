// SPDX-License-Identifier: MPL-2.0
use std::io;

/// Errors produced by the toast queue and its configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A toast request carried a message that is not a string.
    #[error("toast message must be a string, received {found}")]
    InvalidMessage { found: &'static str },

    /// A toast request named a variant outside the known set.
    #[error("unknown toast variant: {0}")]
    InvalidVariant(String),

    /// A toast request carried a duration that is not a non-negative integer.
    #[error("toast duration must be a non-negative integer, received {0}")]
    InvalidDuration(String),

    /// A toast request was not a JSON object.
    #[error("toast request must be an object, received {found}")]
    InvalidRequest { found: &'static str },

    /// The manager was built outside of a tokio runtime.
    #[error("no tokio runtime available to schedule dismiss timers")]
    NoRuntime,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Returns true if this error is a rejected toast request.
    ///
    /// Rejected requests are dropped by the manager and never surface to
    /// the caller as a failure.
    #[must_use]
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidMessage { .. }
                | Error::InvalidVariant(_)
                | Error::InvalidDuration(_)
                | Error::InvalidRequest { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
