use prep_core::LineMetrics;
use prep_core::model::{Difficulty, Question, Severity};
use prep_core::overlay::layout_markers;
use services::HighlightedQuestion;

/// Difficulty tab above the question list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub const TABS: [DifficultyFilter; 4] = [
        DifficultyFilter::All,
        DifficultyFilter::Only(Difficulty::Easy),
        DifficultyFilter::Only(Difficulty::Medium),
        DifficultyFilter::Only(Difficulty::Hard),
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(Difficulty::Easy) => "Easy",
            Self::Only(Difficulty::Medium) => "Medium",
            Self::Only(Difficulty::Hard) => "Hard",
        }
    }

    #[must_use]
    pub fn matches(self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Only(difficulty) => question.difficulty() == difficulty,
        }
    }
}

#[must_use]
pub fn filter_questions(
    questions: &[HighlightedQuestion],
    filter: DifficultyFilter,
) -> Vec<HighlightedQuestion> {
    questions
        .iter()
        .filter(|item| filter.matches(&item.question))
        .cloned()
        .collect()
}

#[must_use]
pub fn questions_heading(count: usize) -> String {
    format!("Questions ({count})")
}

pub const EMPTY_FILTER_MESSAGE: &str = "No questions found for this difficulty level.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CodeTab {
    #[default]
    Problem,
    Solution,
}

/// A positioned mistake ready for the overlay layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MistakeMarkerVm {
    pub id: String,
    pub line: u32,
    /// `ERROR`, `WARNING` or `INFO`.
    pub severity_label: String,
    pub severity_class: &'static str,
    pub message: String,
    pub style: String,
    pub within_code: bool,
}

#[must_use]
pub fn map_mistake_markers(question: &Question, metrics: LineMetrics) -> Vec<MistakeMarkerVm> {
    layout_markers(question.mistakes(), question.suboptimal_line_count(), metrics)
        .into_iter()
        .map(|marker| MistakeMarkerVm {
            id: marker.mistake.id().to_string(),
            line: marker.mistake.line().get(),
            severity_label: marker.mistake.severity().as_str().to_ascii_uppercase(),
            severity_class: severity_class(marker.mistake.severity()),
            message: marker.mistake.message().to_owned(),
            style: marker.band.css(),
            within_code: marker.within_code,
        })
        .collect()
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "mistake--error",
        Severity::Warning => "mistake--warning",
        Severity::Info => "mistake--info",
    }
}

#[must_use]
pub fn mistake_toggle_label(showing: bool) -> &'static str {
    if showing { "Hide Mistakes" } else { "Reveal Mistakes" }
}

#[must_use]
pub fn completion_label(completed: bool) -> &'static str {
    if completed { "Completed" } else { "Mark Done" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::model::{LineNumber, Mistake, MistakeId, QuestionDraft, QuestionId};
    use services::RenderedCode;

    fn question(id: &str, difficulty: Difficulty) -> Question {
        Question::new(
            QuestionId::new(id),
            difficulty,
            QuestionDraft {
                slug: id.to_owned(),
                title: id.to_owned(),
                suboptimal_code: "a\nb\nc".to_owned(),
                correct_code: "a".to_owned(),
                mistakes: vec![Mistake::new(
                    MistakeId::new("m1"),
                    LineNumber::new(3).unwrap(),
                    "Third line is wrong.",
                    Severity::Warning,
                )],
                ..QuestionDraft::default()
            },
        )
    }

    fn highlighted(id: &str, difficulty: Difficulty) -> HighlightedQuestion {
        let plain = RenderedCode {
            html: String::new(),
            highlighted: false,
        };
        HighlightedQuestion {
            question: question(id, difficulty),
            preview: plain.clone(),
            solution: plain,
        }
    }

    #[test]
    fn filter_keeps_only_matching_difficulty() {
        let items = vec![
            highlighted("a", Difficulty::Easy),
            highlighted("b", Difficulty::Hard),
            highlighted("c", Difficulty::Easy),
        ];
        let easy = filter_questions(&items, DifficultyFilter::Only(Difficulty::Easy));
        assert_eq!(easy.len(), 2);
        assert_eq!(filter_questions(&items, DifficultyFilter::All).len(), 3);
        assert!(filter_questions(&items, DifficultyFilter::Only(Difficulty::Medium)).is_empty());
    }

    #[test]
    fn tab_labels() {
        let labels: Vec<_> = DifficultyFilter::TABS.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Easy", "Medium", "Hard"]);
        assert_eq!(questions_heading(35), "Questions (35)");
    }

    #[test]
    fn markers_carry_tooltip_text_and_position() {
        let markers = map_mistake_markers(&question("q", Difficulty::Easy), LineMetrics::CODE_BLOCK);
        assert_eq!(markers.len(), 1);
        let marker = &markers[0];
        assert_eq!(marker.severity_label, "WARNING");
        assert_eq!(marker.line, 3);
        assert_eq!(marker.style, "top: 64px; height: 24px;");
        assert!(marker.within_code);
    }
}
