use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::model::ids::{MistakeId, QuestionId};

//
// ─── ENUMS ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Upper-case label used on badges and filter tabs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── LINE NUMBERS ──────────────────────────────────────────────────────────────
//

/// 1-based line number into a code sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LineNumber(NonZeroU32);

impl LineNumber {
    /// Returns `None` for line 0.
    #[must_use]
    pub fn new(line: u32) -> Option<Self> {
        NonZeroU32::new(line).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based row, as used by layout math.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl TryFrom<u32> for LineNumber {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "line numbers start at 1".to_owned())
    }
}

impl From<LineNumber> for u32 {
    fn from(value: LineNumber) -> Self {
        value.get()
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── MISTAKES ──────────────────────────────────────────────────────────────────
//

/// A line-anchored annotation describing a defect in a question's flawed sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    id: MistakeId,
    line: LineNumber,
    message: String,
    severity: Severity,
}

impl Mistake {
    #[must_use]
    pub fn new(
        id: MistakeId,
        line: LineNumber,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id,
            line,
            message: message.into(),
            severity,
        }
    }

    #[must_use]
    pub fn id(&self) -> &MistakeId {
        &self.id
    }

    #[must_use]
    pub fn line(&self) -> LineNumber {
        self.line
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One unit of content: flawed sample, corrected sample, annotations, tips and hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    slug: String,
    title: String,
    difficulty: Difficulty,
    description: String,
    suboptimal_code: String,
    correct_code: String,
    #[serde(default)]
    mistakes: Vec<Mistake>,
    #[serde(default)]
    pro_tips: Vec<String>,
    #[serde(default)]
    hints: Vec<String>,
    #[serde(default)]
    explanation: String,
}

/// Owned field set used to build a [`Question`] outside of content files.
#[derive(Debug, Clone, Default)]
pub struct QuestionDraft {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub suboptimal_code: String,
    pub correct_code: String,
    pub mistakes: Vec<Mistake>,
    pub pro_tips: Vec<String>,
    pub hints: Vec<String>,
    pub explanation: String,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, difficulty: Difficulty, draft: QuestionDraft) -> Self {
        Self {
            id,
            slug: draft.slug,
            title: draft.title,
            difficulty,
            description: draft.description,
            suboptimal_code: draft.suboptimal_code,
            correct_code: draft.correct_code,
            mistakes: draft.mistakes,
            pro_tips: draft.pro_tips,
            hints: draft.hints,
            explanation: draft.explanation,
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn suboptimal_code(&self) -> &str {
        &self.suboptimal_code
    }

    #[must_use]
    pub fn correct_code(&self) -> &str {
        &self.correct_code
    }

    #[must_use]
    pub fn mistakes(&self) -> &[Mistake] {
        &self.mistakes
    }

    #[must_use]
    pub fn pro_tips(&self) -> &[String] {
        &self.pro_tips
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Number of lines in the flawed sample that mistakes point into.
    #[must_use]
    pub fn suboptimal_line_count(&self) -> usize {
        line_count(&self.suboptimal_code)
    }
}

/// Counts lines the way a `<pre>` block renders them: a trailing newline does
/// not open an extra line, and empty text has none.
#[must_use]
pub fn line_count(code: &str) -> usize {
    if code.is_empty() {
        return 0;
    }
    let lines = code.split('\n').count();
    if code.ends_with('\n') { lines - 1 } else { lines }
}
