// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the ordered queue of active toasts, issues their ids,
//! schedules auto-dismiss timers and evicts the oldest toasts once the
//! queue is over capacity.
//!
//! `Manager` is a cheap-to-clone handle. All handles share one queue and
//! every public operation runs under a single lock, so the queue has exactly
//! one writer at a time. Timers are tokio tasks that only hold a weak
//! reference to the queue: dropping the last handle aborts them.

use super::input::ToastInput;
use super::notification::{DismissReason, Toast, ToastId};
use super::settings::ToastSettings;
use crate::diagnostics::DiagnosticsHandle;
use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;

/// Messages a UI layer sends back to the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user closed a toast.
    Dismiss(ToastId),
    /// The user pressed a toast's action button.
    Action(ToastId),
}

/// Handle to a toast queue.
#[derive(Clone)]
pub struct Manager {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<State>,
    settings: ToastSettings,
    runtime: Handle,
    snapshot_tx: watch::Sender<Vec<Toast>>,
}

#[derive(Default)]
struct State {
    /// Active toasts, oldest first.
    active: VecDeque<Toast>,
    /// Pending auto-dismiss timers by toast id.
    timers: HashMap<ToastId, AbortHandle>,
    /// Last id handed out.
    last_id: u64,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates a manager whose timers run on `runtime`.
    #[must_use]
    pub fn new(settings: ToastSettings, runtime: Handle) -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State::default()),
                settings,
                runtime,
                snapshot_tx,
            }),
        }
    }

    /// Creates a manager on the tokio runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRuntime`] when called outside a tokio runtime.
    pub fn try_current(settings: ToastSettings) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Ok(Self::new(settings, runtime))
    }

    /// Reports lifecycle events and rejected requests to `handle`.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        self.inner.state.lock().diagnostics = Some(handle);
    }

    #[must_use]
    pub fn settings(&self) -> ToastSettings {
        self.inner.settings
    }

    /// Queues a toast and returns its id.
    ///
    /// If the queue is over capacity afterwards, the oldest toasts are
    /// evicted. The new toast always survives, since capacity is at least one.
    /// Unless its resolved duration is zero, a timer dismisses it later.
    pub fn add_toast(&self, input: ToastInput) -> ToastId {
        let duration = input.duration.unwrap_or(self.inner.settings.default_duration);
        let max_visible = self.inner.settings.max_visible.value();

        let mut state = self.inner.state.lock();
        state.last_id += 1;
        let id = ToastId::from_raw(state.last_id);
        let toast = Toast::new(id, input.message, input.variant, duration, input.action);

        tracing::debug!(%id, variant = ?toast.variant(), duration_ms = duration.as_millis(), "toast added");
        if let Some(diagnostics) = &state.diagnostics {
            diagnostics.log_toast_added(&toast);
        }
        state.active.push_back(toast);

        while state.active.len() > max_visible {
            let Some(evicted) = state.active.pop_front() else {
                break;
            };
            let evicted_id = evicted.id();
            if let Some(timer) = state.timers.remove(&evicted_id) {
                timer.abort();
            }
            tracing::debug!(id = %evicted_id, max_visible, "toast evicted");
            if let Some(diagnostics) = &state.diagnostics {
                diagnostics.log_toast_dismissed(evicted_id, DismissReason::Evicted);
            }
        }

        if let Some(delay) = duration.auto_dismiss_after() {
            let timer = self.spawn_timer(id, delay);
            state.timers.insert(id, timer);
        }

        self.inner.publish(&state);
        id
    }

    /// Queues a toast described by an untyped JSON object.
    ///
    /// Malformed requests, most notably a non-string `message`, are dropped:
    /// the queue is left untouched, the problem is logged and reported to
    /// diagnostics, and `None` is returned.
    pub fn add_toast_value(&self, request: &serde_json::Value) -> Option<ToastId> {
        match ToastInput::from_value(request) {
            Ok(input) => Some(self.add_toast(input)),
            Err(err) => {
                self.reject(&err);
                None
            }
        }
    }

    /// Removes a toast. Unknown ids are ignored.
    ///
    /// Returns `true` if the toast was present.
    pub fn remove_toast(&self, id: ToastId) -> bool {
        self.inner.dismiss(id, DismissReason::User)
    }

    /// Runs the action callback of a queued toast.
    ///
    /// The queue is not changed. Returns `false` if the toast is gone or has
    /// no action.
    pub fn trigger_action(&self, id: ToastId) -> bool {
        let action = {
            let state = self.inner.state.lock();
            state
                .active
                .iter()
                .find(|toast| toast.id() == id)
                .and_then(|toast| toast.action().cloned())
        };

        // Run outside the lock so the callback may use the manager.
        match action {
            Some(action) => {
                tracing::debug!(%id, label = action.label(), "toast action triggered");
                action.invoke();
                true
            }
            None => false,
        }
    }

    /// Handles a message from the UI layer.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove_toast(*id);
            }
            Message::Action(id) => {
                self.trigger_action(*id);
            }
        }
    }

    /// Removes every toast and cancels all pending timers.
    pub fn clear(&self) {
        let mut state = self.inner.state.lock();
        for (_, timer) in state.timers.drain() {
            timer.abort();
        }
        let cleared: Vec<ToastId> = state.active.drain(..).map(|toast| toast.id()).collect();
        if let Some(diagnostics) = &state.diagnostics {
            for id in &cleared {
                diagnostics.log_toast_dismissed(*id, DismissReason::Cleared);
            }
        }
        tracing::debug!(count = cleared.len(), "toasts cleared");
        self.inner.publish(&state);
    }

    /// Returns the active toasts, oldest first.
    #[must_use]
    pub fn get_active(&self) -> Vec<Toast> {
        self.inner.state.lock().active.iter().cloned().collect()
    }

    /// Subscribes to queue changes.
    ///
    /// The receiver holds the current snapshot and is marked changed after
    /// every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.snapshot_tx.subscribe()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.inner
            .state
            .lock()
            .active
            .iter()
            .any(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.state.lock().active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.state.lock().active.is_empty()
    }

    /// Number of auto-dismiss timers still pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.inner.state.lock().timers.len()
    }

    fn spawn_timer(&self, id: ToastId, delay: Duration) -> AbortHandle {
        let queue: Weak<Inner> = Arc::downgrade(&self.inner);
        let deadline = tokio::time::Instant::now().checked_add(delay);
        self.inner
            .runtime
            .spawn(async move {
                match deadline {
                    Some(deadline) => tokio::time::sleep_until(deadline).await,
                    // Past the clock's range; `sleep` saturates to its far future.
                    None => tokio::time::sleep(delay).await,
                }
                if let Some(inner) = queue.upgrade() {
                    inner.dismiss(id, DismissReason::Timer);
                }
            })
            .abort_handle()
    }

    fn reject(&self, err: &Error) {
        tracing::error!(error = %err, "toast request rejected");
        if let Some(diagnostics) = &self.inner.state.lock().diagnostics {
            diagnostics.log_input_rejected(err);
        }
    }
}

impl Inner {
    /// Removes `id` from the queue. A no-op if it is already gone, which is
    /// how a timer that lost the race against an explicit removal ends.
    fn dismiss(&self, id: ToastId, reason: DismissReason) -> bool {
        let mut state = self.state.lock();
        let Some(pos) = state.active.iter().position(|toast| toast.id() == id) else {
            return false;
        };
        state.active.remove(pos);

        if let Some(timer) = state.timers.remove(&id) {
            // A firing timer is the task calling us; nothing to cancel.
            if reason != DismissReason::Timer {
                timer.abort();
            }
        }

        tracing::debug!(%id, ?reason, "toast dismissed");
        if let Some(diagnostics) = &state.diagnostics {
            diagnostics.log_toast_dismissed(id, reason);
        }
        self.publish(&state);
        true
    }

    fn publish(&self, state: &State) {
        self.snapshot_tx
            .send_replace(state.active.iter().cloned().collect());
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for (_, timer) in self.state.get_mut().timers.drain() {
            timer.abort();
        }
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Manager")
            .field("settings", &self.inner.settings)
            .field("active", &state.active.len())
            .field("pending_timers", &state.timers.len())
            .finish()
    }
}
