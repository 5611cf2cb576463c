use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Question, QuestionId};

/// The persisted progress blob could not be read back.
#[derive(Debug, Error)]
#[error("progress blob is not valid JSON: {0}")]
pub struct ProgressParseError(#[from] serde_json::Error);

/// Which questions a user has completed or saved.
///
/// Serialized as `{"completed": [...], "saved": [...]}`; missing keys read as
/// empty lists so older blobs keep loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    #[serde(default)]
    completed: BTreeSet<QuestionId>,
    #[serde(default)]
    saved: BTreeSet<QuestionId>,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `ProgressParseError` when `raw` is not a JSON object of the
    /// expected shape.
    pub fn decode(raw: &str) -> Result<Self, ProgressParseError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn encode(&self) -> String {
        // Sets of strings always serialize.
        serde_json::to_string(self).unwrap_or_else(|_| String::from(r#"{"completed":[],"saved":[]}"#))
    }

    /// Returns whether the question is completed after the flip.
    pub fn toggle_completed(&mut self, id: &QuestionId) -> bool {
        toggle(&mut self.completed, id)
    }

    /// Returns whether the question is saved after the flip.
    pub fn toggle_saved(&mut self, id: &QuestionId) -> bool {
        toggle(&mut self.saved, id)
    }

    #[must_use]
    pub fn is_completed(&self, id: &QuestionId) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn is_saved(&self, id: &QuestionId) -> bool {
        self.saved.contains(id)
    }

    pub fn completed(&self) -> impl Iterator<Item = &QuestionId> {
        self.completed.iter()
    }

    pub fn saved(&self) -> impl Iterator<Item = &QuestionId> {
        self.saved.iter()
    }

    /// How many of `questions` are marked completed.
    #[must_use]
    pub fn completed_in(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .filter(|question| self.is_completed(question.id()))
            .count()
    }
}

fn toggle(set: &mut BTreeSet<QuestionId>, id: &QuestionId) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.clone());
        true
    }
}

/// State that only becomes available after the first render.
///
/// The first frame always renders `Uninitialized` so it matches a pass that
/// has no access to persisted storage; [`Hydration::hydrate`] is the single
/// transition to `Ready`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Hydration<T> {
    #[default]
    Uninitialized,
    Ready(T),
}

impl<T> Hydration<T> {
    #[must_use]
    pub fn hydrate(self, data: T) -> Self {
        Self::Ready(data)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            Self::Uninitialized => None,
        }
    }

    #[must_use]
    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(data) => Some(data),
            Self::Uninitialized => None,
        }
    }
}

impl Hydration<ProgressState> {
    /// False for every question until hydrated.
    #[must_use]
    pub fn is_completed(&self, id: &QuestionId) -> bool {
        self.ready().is_some_and(|state| state.is_completed(id))
    }

    #[must_use]
    pub fn is_saved(&self, id: &QuestionId) -> bool {
        self.ready().is_some_and(|state| state.is_saved(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> QuestionId {
        QuestionId::new(raw)
    }

    #[test]
    fn untouched_questions_are_neither_completed_nor_saved() {
        let state = ProgressState::new();
        assert!(!state.is_completed(&id("h1")));
        assert!(!state.is_saved(&id("h1")));
    }

    #[test]
    fn toggling_twice_restores_membership() {
        let mut state = ProgressState::new();
        assert!(state.toggle_completed(&id("h1")));
        assert!(state.is_completed(&id("h1")));
        assert!(!state.toggle_completed(&id("h1")));
        assert!(!state.is_completed(&id("h1")));
        assert_eq!(state, ProgressState::new());
    }

    #[test]
    fn completed_and_saved_are_independent() {
        let mut state = ProgressState::new();
        state.toggle_saved(&id("p2"));
        assert!(state.is_saved(&id("p2")));
        assert!(!state.is_completed(&id("p2")));
    }

    #[test]
    fn encode_uses_the_documented_shape() {
        let mut state = ProgressState::new();
        state.toggle_completed(&id("h1"));
        state.toggle_saved(&id("pat2"));
        assert_eq!(state.encode(), r#"{"completed":["h1"],"saved":["pat2"]}"#);
    }

    #[test]
    fn decode_reproduces_encoded_sets() {
        let mut state = ProgressState::new();
        for raw in ["h1", "h3", "p1"] {
            state.toggle_completed(&id(raw));
        }
        state.toggle_saved(&id("h3"));
        state.toggle_completed(&id("h3"));

        let decoded = ProgressState::decode(&state.encode()).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn decode_tolerates_missing_keys_and_duplicates() {
        let decoded = ProgressState::decode(r#"{"completed":["h1","h1"]}"#).unwrap();
        assert!(decoded.is_completed(&id("h1")));
        assert_eq!(decoded.completed().count(), 1);
        assert_eq!(decoded.saved().count(), 0);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(ProgressState::decode("not json").is_err());
        assert!(ProgressState::decode(r#"{"completed": 3}"#).is_err());
    }

    #[test]
    fn uninitialized_hydration_reports_nothing() {
        let mut state = ProgressState::new();
        state.toggle_completed(&id("h1"));

        let pending: Hydration<ProgressState> = Hydration::Uninitialized;
        assert!(!pending.is_completed(&id("h1")));

        let ready = pending.hydrate(state);
        assert!(ready.is_ready());
        assert!(ready.is_completed(&id("h1")));
        assert!(!ready.is_saved(&id("h1")));
    }
}
