use std::sync::{Arc, Mutex};

use prep_core::model::QuestionId;
use prep_core::{Hydration, ProgressState};
use storage::repository::KeyValueRepository;
use tracing::{debug, warn};

use crate::error::ProgressError;

/// Storage key holding the serialized [`ProgressState`].
pub const PROGRESS_STORAGE_KEY: &str = "react-prep-progress";

/// Completed/saved question sets backed by a key/value repository.
///
/// The store starts `Uninitialized`; [`ProgressStore::load`] is the only way
/// to reach `Ready`. Every toggle rewrites the whole blob with a single
/// `put_value`. Writers in other processes are not observed, the last write
/// wins.
pub struct ProgressStore {
    repo: Arc<dyn KeyValueRepository>,
    key: Arc<str>,
    state: Arc<Mutex<Hydration<ProgressState>>>,
    writes: Arc<tokio::sync::Mutex<()>>,
}

#[derive(Debug, Clone)]
enum Toggle {
    Completed(QuestionId),
    Saved(QuestionId),
}

impl Toggle {
    fn apply(&self, state: &mut ProgressState) {
        match self {
            Self::Completed(id) => {
                state.toggle_completed(id);
            }
            Self::Saved(id) => {
                state.toggle_saved(id);
            }
        }
    }
}

impl ProgressStore {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self::with_key(repo, PROGRESS_STORAGE_KEY)
    }

    #[must_use]
    pub fn with_key(repo: Arc<dyn KeyValueRepository>, key: impl Into<String>) -> Self {
        Self {
            repo,
            key: Arc::from(key.into()),
            state: Arc::new(Mutex::new(Hydration::Uninitialized)),
            writes: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted blob and mark the store hydrated.
    ///
    /// A missing, malformed or unreadable blob yields empty progress; the
    /// cause is logged and never returned.
    pub async fn load(&self) -> ProgressState {
        // A toggle in flight must land before the blob is read back.
        let _write = self.writes.lock().await;

        let loaded = match self.repo.get_value(&self.key).await {
            Ok(Some(stored)) => ProgressState::decode(&stored.value).unwrap_or_else(|err| {
                warn!(key = %self.key, error = %err, "discarding unreadable progress");
                ProgressState::new()
            }),
            Ok(None) => {
                debug!(key = %self.key, "no saved progress");
                ProgressState::new()
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "progress storage unavailable");
                ProgressState::new()
            }
        };

        match self.state.lock() {
            Ok(mut guard) => *guard = std::mem::take(&mut *guard).hydrate(loaded.clone()),
            Err(_) => warn!("progress state lock poisoned; keeping loaded copy only"),
        }
        loaded
    }

    /// Flip the completed flag and persist.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NotHydrated` before [`ProgressStore::load`]
    /// has run (nothing is written), `ProgressError::Storage` when the write
    /// fails (memory is left unchanged).
    pub async fn toggle_completed(&self, id: &QuestionId) -> Result<ProgressState, ProgressError> {
        self.update(Toggle::Completed(id.clone())).await
    }

    /// Flip the saved flag and persist.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProgressStore::toggle_completed`].
    pub async fn toggle_saved(&self, id: &QuestionId) -> Result<ProgressState, ProgressError> {
        self.update(Toggle::Saved(id.clone())).await
    }

    /// False for every question until hydrated.
    #[must_use]
    pub fn is_completed(&self, id: &QuestionId) -> bool {
        self.state
            .lock()
            .is_ok_and(|guard| guard.is_completed(id))
    }

    #[must_use]
    pub fn is_saved(&self, id: &QuestionId) -> bool {
        self.state.lock().is_ok_and(|guard| guard.is_saved(id))
    }

    #[must_use]
    pub fn snapshot(&self) -> Hydration<ProgressState> {
        self.state
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    async fn update(&self, toggle: Toggle) -> Result<ProgressState, ProgressError> {
        // Serializes read-modify-write so overlapping toggles do not drop
        // each other's flips.
        let write = Arc::clone(&self.writes).lock_owned().await;

        let mut next = {
            let guard = self.state.lock().map_err(|_| ProgressError::Poisoned)?;
            guard.ready().cloned().ok_or(ProgressError::NotHydrated)?
        };
        toggle.apply(&mut next);

        let repo = Arc::clone(&self.repo);
        let key = Arc::clone(&self.key);
        let state = Arc::clone(&self.state);
        let blob = next.encode();

        // Detached: once the write starts, storage and memory are committed
        // together even if the caller is dropped.
        let commit = tokio::spawn(async move {
            let _write = write;
            repo.put_value(&key, &blob).await?;
            {
                let mut guard = state.lock().map_err(|_| ProgressError::Poisoned)?;
                *guard = Hydration::Ready(next.clone());
            }
            Ok::<_, ProgressError>(next)
        });
        commit.await?
    }
}
