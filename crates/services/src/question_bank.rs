use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use prep_core::model::{Question, Topic, TopicId};
use prep_core::{Catalog, ProgressState};
use tracing::debug;

use crate::error::QuestionBankError;
use crate::highlight::{HighlightService, RenderedCode};

/// Language every catalog sample is written in.
const SAMPLE_LANGUAGE: &str = "tsx";

/// A question with both code samples already rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedQuestion {
    pub question: Question,
    pub preview: RenderedCode,
    pub solution: RenderedCode,
}

/// Everything the topic page shows.
#[derive(Debug, Clone)]
pub struct TopicPage {
    pub topic: Topic,
    pub questions: Arc<[HighlightedQuestion]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    /// `completed / total` as a whole percentage, rounded; 0 when `total` is 0.
    pub percent: u8,
}

impl ProgressSummary {
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        let completed = completed.min(total);
        let percent = if total == 0 {
            0
        } else {
            u8::try_from((completed * 100 + total / 2) / total).unwrap_or(100)
        };
        Self {
            completed,
            total,
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicProgress {
    pub topic_id: TopicId,
    pub summary: ProgressSummary,
}

/// Read side of the catalog for the UI: lookups, highlighted questions and
/// progress totals.
pub struct QuestionBankService {
    catalog: Arc<Catalog>,
    highlighter: Arc<HighlightService>,
    rendered: Mutex<HashMap<TopicId, Arc<[HighlightedQuestion]>>>,
}

impl QuestionBankService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, highlighter: Arc<HighlightService>) -> Self {
        Self {
            catalog,
            highlighter,
            rendered: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        self.catalog.topics()
    }

    /// # Errors
    ///
    /// Returns `QuestionBankError::NotFound` for unknown slugs.
    pub fn topic_by_slug(&self, slug: &str) -> Result<Topic, QuestionBankError> {
        Ok(self.catalog.topic_by_slug(slug)?.clone())
    }

    /// Questions of a topic with both samples rendered as TSX.
    ///
    /// Content never changes at runtime, so each topic is rendered once per
    /// process and shared afterwards.
    #[must_use]
    pub fn highlighted_questions(&self, topic: &TopicId) -> Arc<[HighlightedQuestion]> {
        if let Some(cached) = self
            .rendered
            .lock()
            .ok()
            .and_then(|cache| cache.get(topic).cloned())
        {
            debug!(%topic, "highlighted questions served from cache");
            return cached;
        }

        let rendered: Arc<[HighlightedQuestion]> = self
            .catalog
            .questions_for(topic)
            .iter()
            .map(|question| HighlightedQuestion {
                preview: self
                    .highlighter
                    .highlight_or_plain(question.suboptimal_code(), SAMPLE_LANGUAGE),
                solution: self
                    .highlighter
                    .highlight_or_plain(question.correct_code(), SAMPLE_LANGUAGE),
                question: question.clone(),
            })
            .collect();
        debug!(%topic, count = rendered.len(), "highlighted topic questions");

        if let Ok(mut cache) = self.rendered.lock() {
            cache.insert(topic.clone(), Arc::clone(&rendered));
        }
        rendered
    }

    /// # Errors
    ///
    /// Returns `QuestionBankError::NotFound` for unknown slugs.
    pub fn topic_page(&self, slug: &str) -> Result<TopicPage, QuestionBankError> {
        let topic = self.topic_by_slug(slug)?;
        let questions = self.highlighted_questions(topic.id());
        Ok(TopicPage { topic, questions })
    }

    /// Per-topic completion in catalog order.
    #[must_use]
    pub fn topic_progress(&self, progress: &ProgressState) -> Vec<TopicProgress> {
        self.catalog
            .topics()
            .iter()
            .map(|topic| {
                let questions = self.catalog.questions_for(topic.id());
                TopicProgress {
                    topic_id: topic.id().clone(),
                    summary: ProgressSummary::new(progress.completed_in(questions), questions.len()),
                }
            })
            .collect()
    }

    /// Completion across every topic.
    #[must_use]
    pub fn overall_progress(&self, progress: &ProgressState) -> ProgressSummary {
        let (completed, total) = self
            .catalog
            .topics()
            .iter()
            .map(|topic| self.catalog.questions_for(topic.id()))
            .fold((0, 0), |(completed, total), questions| {
                (
                    completed + progress.completed_in(questions),
                    total + questions.len(),
                )
            });
        ProgressSummary::new(completed, total)
    }
}
