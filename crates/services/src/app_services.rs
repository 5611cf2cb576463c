use std::sync::Arc;

use prep_core::Catalog;
use storage::repository::Storage;
use tracing::{info, warn};

use crate::error::AppServicesError;
use crate::highlight::{HighlightConfig, HighlightService};
use crate::progress_store::ProgressStore;
use crate::question_bank::QuestionBankService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    question_bank: Arc<QuestionBankService>,
    progress: Arc<ProgressStore>,
    highlighter: Arc<HighlightService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// embedded catalog cannot be parsed.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage)
    }

    /// Build services that keep progress in memory only.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the embedded catalog cannot be
    /// parsed.
    pub fn in_memory() -> Result<Self, AppServicesError> {
        Self::from_storage(&Storage::in_memory())
    }

    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the embedded catalog cannot be
    /// parsed.
    pub fn from_storage(storage: &Storage) -> Result<Self, AppServicesError> {
        let catalog = Catalog::builtin()?;
        let issues = catalog.validate();
        for issue in &issues {
            warn!(%issue, "catalog content issue");
        }
        info!(
            topics = catalog.topics().len(),
            questions = catalog.question_count(),
            issues = issues.len(),
            "catalog loaded"
        );

        Ok(Self::with_parts(
            catalog,
            HighlightConfig::default(),
            ProgressStore::new(Arc::clone(&storage.local)),
        ))
    }

    #[must_use]
    pub fn with_parts(catalog: Catalog, config: HighlightConfig, progress: ProgressStore) -> Self {
        let highlighter = Arc::new(HighlightService::new(config));
        let question_bank = Arc::new(QuestionBankService::new(
            Arc::new(catalog),
            Arc::clone(&highlighter),
        ));
        Self {
            question_bank,
            progress: Arc::new(progress),
            highlighter,
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn progress_store(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn highlighter(&self) -> Arc<HighlightService> {
        Arc::clone(&self.highlighter)
    }
}
