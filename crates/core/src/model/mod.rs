mod ids;
mod question;
mod topic;

pub use ids::{MistakeId, ParseIdError, QuestionId, TopicId};
pub use question::{Difficulty, LineNumber, Mistake, Question, QuestionDraft, Severity, line_count};
pub use topic::{Topic, TopicIcon};
