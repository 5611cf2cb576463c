//! Shared, hydration-aware progress state for the component tree.
//!
//! One [`ProgressHandle`] is provided by the layout so every question card on
//! a page reads and writes the same state. The first render always sees
//! `Hydration::Uninitialized`; the stored blob is read by a future that runs
//! after mount.

use std::sync::Arc;

use dioxus::prelude::*;
use prep_core::model::QuestionId;
use prep_core::{Hydration, ProgressState};
use services::{ProgressError, ProgressStore};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flag {
    Completed,
    Saved,
}

#[derive(Clone)]
pub struct ProgressHandle {
    state: Signal<Hydration<ProgressState>>,
    store: Arc<ProgressStore>,
}

impl PartialEq for ProgressHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Arc::ptr_eq(&self.store, &other.store)
    }
}

impl ProgressHandle {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.read().is_ready()
    }

    #[must_use]
    pub fn is_completed(&self, id: &QuestionId) -> bool {
        self.state.read().is_completed(id)
    }

    #[must_use]
    pub fn is_saved(&self, id: &QuestionId) -> bool {
        self.state.read().is_saved(id)
    }

    /// Current sets, empty until hydrated.
    #[must_use]
    pub fn state(&self) -> ProgressState {
        self.state.read().ready().cloned().unwrap_or_default()
    }

    pub fn toggle_completed(&self, id: QuestionId) {
        self.toggle(id, Flag::Completed);
    }

    pub fn toggle_saved(&self, id: QuestionId) {
        self.toggle(id, Flag::Saved);
    }

    /// Runs outside the calling component, so a card that unmounts mid-write
    /// (filter change, navigation) still gets its toggle reflected.
    fn toggle(&self, id: QuestionId, flag: Flag) {
        let store = Arc::clone(&self.store);
        let mut state = self.state;
        spawn_forever(async move {
            let result = match flag {
                Flag::Completed => store.toggle_completed(&id).await,
                Flag::Saved => store.toggle_saved(&id).await,
            };
            match result {
                Ok(next) => match state.try_write() {
                    Ok(mut current) => *current = Hydration::Ready(next),
                    Err(_) => debug!(question = %id, "progress saved after its view closed"),
                },
                Err(ProgressError::NotHydrated) => {
                    debug!(question = %id, "progress toggle ignored before hydration");
                }
                Err(err) => warn!(question = %id, error = %err, "failed to save progress"),
            }
        });
    }
}

/// Create the shared handle and start hydration. Call once, near the root.
pub fn use_progress_provider(store: Arc<ProgressStore>) -> ProgressHandle {
    let mut state = use_signal(Hydration::<ProgressState>::default);

    let loader = Arc::clone(&store);
    use_future(move || {
        let loader = Arc::clone(&loader);
        async move {
            let loaded = loader.load().await;
            state.set(Hydration::Uninitialized.hydrate(loaded));
        }
    });

    use_context_provider(move || ProgressHandle { state, store })
}

#[must_use]
pub fn use_progress() -> ProgressHandle {
    use_context::<ProgressHandle>()
}
