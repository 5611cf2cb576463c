//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::CatalogError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

use crate::highlight::CodeLanguage;

/// Errors emitted by `HighlightService`.
///
/// Callers that only need markup should go through
/// `HighlightService::highlight_or_plain`, which logs these and falls back to
/// unstyled code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RenderError {
    #[error("no highlighter for language `{0}`")]
    UnsupportedLanguage(String),
    #[error("{0} grammar failed to load")]
    GrammarUnavailable(CodeLanguage),
    #[error("source is {len} bytes, highlighting is capped at {max}")]
    SourceTooLarge { len: usize, max: usize },
    #[error("{0} parser produced no tree")]
    ParseFailed(CodeLanguage),
}

/// Errors emitted by `ProgressStore`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("progress has not been loaded yet")]
    NotHydrated,
    #[error("progress state lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("progress write task failed: {0}")]
    WriteTask(#[from] tokio::task::JoinError),
}

/// Errors emitted by `QuestionBankService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("topic `{0}` not found")]
    NotFound(String),
    #[error(transparent)]
    Catalog(CatalogError),
}

impl From<CatalogError> for QuestionBankError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::TopicNotFound(slug) => Self::NotFound(slug),
            other => Self::Catalog(other),
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
