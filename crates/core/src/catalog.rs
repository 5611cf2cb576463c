//! Static question bank content.
//!
//! Topics and questions ship as YAML embedded in the binary. Changing content
//! means editing `content/` and rebuilding; nothing here is configurable at
//! runtime.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{LineNumber, MistakeId, Question, QuestionId, Topic, TopicId};

const TOPICS_YAML: &str = include_str!("../content/topics.yaml");
const QUESTION_SOURCES: [&str; 3] = [
    include_str!("../content/hooks.yaml"),
    include_str!("../content/performance.yaml"),
    include_str!("../content/patterns.yaml"),
];

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog content is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("no topic with slug `{0}`")]
    TopicNotFound(String),

    #[error("questions reference unknown topic `{0}`")]
    UnknownTopic(TopicId),
}

/// Authoring mistakes found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogIssue {
    MistakeLineOutOfRange {
        question: QuestionId,
        mistake: MistakeId,
        line: LineNumber,
        line_count: usize,
    },
    DuplicateQuestionId(QuestionId),
    DuplicateMistakeId {
        question: QuestionId,
        mistake: MistakeId,
    },
    DuplicateTopicSlug(String),
    DuplicateQuestionSlug {
        topic: TopicId,
        slug: String,
    },
    EmptyCode {
        question: QuestionId,
        field: &'static str,
    },
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MistakeLineOutOfRange {
                question,
                mistake,
                line,
                line_count,
            } => write!(
                f,
                "{question}/{mistake}: line {line} is past the end of a {line_count}-line sample"
            ),
            Self::DuplicateQuestionId(id) => write!(f, "question id `{id}` is used more than once"),
            Self::DuplicateMistakeId { question, mistake } => {
                write!(f, "{question}: mistake id `{mistake}` is used more than once")
            }
            Self::DuplicateTopicSlug(slug) => write!(f, "topic slug `{slug}` is used more than once"),
            Self::DuplicateQuestionSlug { topic, slug } => {
                write!(f, "{topic}: question slug `{slug}` is used more than once")
            }
            Self::EmptyCode { question, field } => write!(f, "{question}: {field} is empty"),
        }
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct QuestionFile {
    topic: TopicId,
    #[serde(default)]
    questions: Vec<Question>,
}

/// The full set of topics and their questions.
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<Topic>,
    questions: HashMap<TopicId, Vec<Question>>,
}

impl Catalog {
    /// Parse the content embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded YAML is malformed or questions
    /// point at a topic that is not declared.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_sources(TOPICS_YAML, &QUESTION_SOURCES)
    }

    /// Build a catalog from a topic list and any number of per-topic question
    /// files. Files for the same topic are appended in the order given.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed YAML and
    /// `CatalogError::UnknownTopic` for question files whose topic is missing.
    pub fn from_sources(topics_yaml: &str, question_sources: &[&str]) -> Result<Self, CatalogError> {
        let topics: Vec<Topic> = serde_yaml::from_str(topics_yaml)?;
        let known: HashSet<&TopicId> = topics.iter().map(Topic::id).collect();

        let mut questions: HashMap<TopicId, Vec<Question>> = HashMap::new();
        for source in question_sources {
            let file: QuestionFile = serde_yaml::from_str(source)?;
            if !known.contains(&file.topic) {
                return Err(CatalogError::UnknownTopic(file.topic));
            }
            questions.entry(file.topic).or_default().extend(file.questions);
        }

        Ok(Self { topics, questions })
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id() == id)
    }

    /// Look a topic up by its URL slug.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::TopicNotFound` when no topic has that slug.
    pub fn topic_by_slug(&self, slug: &str) -> Result<&Topic, CatalogError> {
        self.topics
            .iter()
            .find(|topic| topic.slug() == slug)
            .ok_or_else(|| CatalogError::TopicNotFound(slug.to_owned()))
    }

    /// Questions for a topic, in authoring order. Empty for unknown topics.
    #[must_use]
    pub fn questions_for(&self, topic: &TopicId) -> &[Question] {
        self.questions.get(topic).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions
            .values()
            .flat_map(|questions| questions.iter())
            .find(|question| question.id() == id)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.values().map(Vec::len).sum()
    }

    /// Authoring-time checks the renderer relies on but does not enforce.
    #[must_use]
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut topic_slugs = HashSet::new();
        for topic in &self.topics {
            if !topic_slugs.insert(topic.slug()) {
                issues.push(CatalogIssue::DuplicateTopicSlug(topic.slug().to_owned()));
            }
        }

        let mut question_ids = HashSet::new();
        for topic in &self.topics {
            let mut question_slugs = HashSet::new();
            for question in self.questions_for(topic.id()) {
                if !question_ids.insert(question.id()) {
                    issues.push(CatalogIssue::DuplicateQuestionId(question.id().clone()));
                }
                if !question_slugs.insert(question.slug()) {
                    issues.push(CatalogIssue::DuplicateQuestionSlug {
                        topic: topic.id().clone(),
                        slug: question.slug().to_owned(),
                    });
                }
                validate_question(question, &mut issues);
            }
        }

        issues
    }
}

fn validate_question(question: &Question, issues: &mut Vec<CatalogIssue>) {
    for (field, code) in [
        ("suboptimal_code", question.suboptimal_code()),
        ("correct_code", question.correct_code()),
    ] {
        if code.trim().is_empty() {
            issues.push(CatalogIssue::EmptyCode {
                question: question.id().clone(),
                field,
            });
        }
    }

    let line_count = question.suboptimal_line_count();
    let mut mistake_ids = HashSet::new();
    for mistake in question.mistakes() {
        if !mistake_ids.insert(mistake.id()) {
            issues.push(CatalogIssue::DuplicateMistakeId {
                question: question.id().clone(),
                mistake: mistake.id().clone(),
            });
        }
        if mistake.line().get() as usize > line_count {
            issues.push(CatalogIssue::MistakeLineOutOfRange {
                question: question.id().clone(),
                mistake: mistake.id().clone(),
                line: mistake.line(),
                line_count,
            });
        }
    }
}
