//! Reusable stateful logic for pages.

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::error::ApiError;
use crate::models::LoadState;

/// Start a backend request and expose its progress as a signal.
///
/// The request is issued immediately. If the owning component is gone by
/// the time it completes, the result is dropped.
pub fn use_remote<T, F, Fut>(fetch: F) -> RwSignal<LoadState<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(LoadState::Loading);
    spawn_local(async move {
        let result = fetch().await;
        let _ = state.try_set(LoadState::from(result));
    });
    state
}

/// Pending flag and inline error message shared by the forms.
#[derive(Clone, Copy)]
pub struct FormState {
    /// A submission is in flight.
    pub pending: RwSignal<bool>,
    /// Message shown under the form.
    pub error: RwSignal<Option<String>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Mark a submission as started. Returns `false` if one is already running.
    pub fn begin(&self) -> bool {
        if self.pending.get_untracked() {
            return false;
        }
        self.pending.set(true);
        self.error.set(None);
        true
    }

    /// Mark the submission finished, optionally with an error.
    pub fn finish(&self, error: Option<String>) {
        let _ = self.pending.try_set(false);
        let _ = self.error.try_set(error);
    }

    /// Reject a submission before it starts.
    pub fn fail(&self, message: impl ToString) {
        self.error.set(Some(message.to_string()));
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
