#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod highlight;
pub mod progress_store;
pub mod question_bank;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressError, QuestionBankError, RenderError};
pub use highlight::{CodeLanguage, HighlightConfig, HighlightService, RenderedCode, render_plain};
pub use progress_store::{PROGRESS_STORAGE_KEY, ProgressStore};
pub use question_bank::{
    HighlightedQuestion, ProgressSummary, QuestionBankService, TopicPage, TopicProgress,
};
