use std::sync::Arc;

use services::{ProgressStore, QuestionBankService};

/// Services the UI needs from the composition root (`crates/app`).
pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBankService>;
    fn progress_store(&self) -> Arc<ProgressStore>;
}

#[derive(Clone)]
pub struct AppContext {
    question_bank: Arc<QuestionBankService>,
    progress_store: Arc<ProgressStore>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_bank: app.question_bank(),
            progress_store: app.progress_store(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBankService> {
        Arc::clone(&self.question_bank)
    }

    #[must_use]
    pub fn progress_store(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress_store)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
