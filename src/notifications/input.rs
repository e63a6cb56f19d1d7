// SPDX-License-Identifier: MPL-2.0
//! Toast requests.
//!
//! [`ToastInput`] is what callers hand to the manager. Typed callers build it
//! directly; untyped callers (scripts, IPC, config-driven messages) go through
//! [`ToastInput::from_value`], which is where malformed requests are caught.

use super::notification::{ToastAction, Variant};
use crate::domain::toast::ToastDuration;
use crate::error::{Error, Result};
use serde_json::Value;
use std::time::Duration;

/// A request to show a toast. The id is assigned by the manager.
#[derive(Debug, Clone)]
pub struct ToastInput {
    pub(crate) message: String,
    pub(crate) variant: Variant,
    pub(crate) duration: Option<ToastDuration>,
    pub(crate) action: Option<ToastAction>,
}

impl ToastInput {
    /// Creates a request with the default variant and the manager's default delay.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: Variant::Default,
            duration: None,
            action: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Info)
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the auto-dismiss delay in milliseconds. `0` keeps the toast until
    /// it is dismissed.
    #[must_use]
    pub fn duration_ms(mut self, millis: u64) -> Self {
        self.duration = Some(ToastDuration::from_millis(millis));
        self
    }

    /// Sets the auto-dismiss delay. A zero duration keeps the toast.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(ToastDuration::new(duration));
        self
    }

    /// Never auto-dismiss.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = Some(ToastDuration::PERSISTENT);
        self
    }

    /// Attaches an action button.
    #[must_use]
    pub fn action(
        mut self,
        label: impl Into<String>,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.action = Some(ToastAction::new(label, callback));
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Builds a request from an untyped JSON object.
    ///
    /// Accepted shape: `{"message": string, "variant"?: string, "duration"?: integer}`.
    /// `durationMs` is accepted as an alias for `duration`. A `null` variant or
    /// duration means "use the default".
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] if `value` is not an object
    /// - [`Error::InvalidMessage`] if `message` is missing or not a string
    /// - [`Error::InvalidVariant`] if `variant` is not a known name
    /// - [`Error::InvalidDuration`] if the duration is not a non-negative integer
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or(Error::InvalidRequest {
            found: json_type_name(value),
        })?;

        let message = match object.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(other) => {
                return Err(Error::InvalidMessage {
                    found: json_type_name(other),
                })
            }
            None => return Err(Error::InvalidMessage { found: "nothing" }),
        };

        let mut input = Self::new(message);

        match object.get("variant") {
            None | Some(Value::Null) => {}
            Some(Value::String(name)) => {
                input.variant =
                    Variant::from_name(name).ok_or_else(|| Error::InvalidVariant(name.clone()))?;
            }
            Some(other) => return Err(Error::InvalidVariant(other.to_string())),
        }

        let duration = object.get("duration").or_else(|| object.get("durationMs"));
        match duration {
            None | Some(Value::Null) => {}
            Some(value) => {
                let millis = value
                    .as_u64()
                    .ok_or_else(|| Error::InvalidDuration(value.to_string()))?;
                input.duration = Some(ToastDuration::from_millis(millis));
            }
        }

        Ok(input)
    }
}

/// Returns a short JSON type name for diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
