//! SummaryView - read-only projection of the answers against the catalog.

use serde::Serialize;

use super::state::WizardState;
use crate::domain::catalog::{QuestionCatalog, QuestionId, QuestionNumber};

/// Shown in place of an answer that was never given (or left empty).
pub const NO_ANSWER_PLACEHOLDER: &str = "(No answer provided)";

pub const SUMMARY_TITLE: &str = "Decision Summary";
pub const SUMMARY_SUBTITLE: &str = "Here is your structured plan.";

/// One row of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub number: u8,
    pub question_id: QuestionId,
    pub step_title: &'static str,
    pub prompt: &'static str,
    pub answer: Option<String>,
}

impl SummaryEntry {
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// The answer text, or the fixed placeholder.
    pub fn display_answer(&self) -> &str {
        self.answer.as_deref().unwrap_or(NO_ANSWER_PLACEHOLDER)
    }

    /// Row label, e.g. `"4. Risk Review"`.
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.step_title)
    }
}

/// Every catalog question with its answer, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub entries: Vec<SummaryEntry>,
}

impl SummaryView {
    /// Builds the summary. Empty answers count as missing.
    pub fn from_state(state: &WizardState) -> Self {
        let entries = QuestionCatalog::numbered()
            .map(|(number, q)| SummaryEntry {
                number: number.get(),
                question_id: q.id,
                step_title: q.step_title,
                prompt: q.prompt,
                answer: state
                    .answer(q.id)
                    .filter(|text| !text.is_empty())
                    .map(str::to_string),
            })
            .collect();

        Self { entries }
    }

    pub fn entry(&self, id: QuestionId) -> Option<&SummaryEntry> {
        self.entries.iter().find(|e| e.question_id == id)
    }

    /// Per-question lookup: the answer, or the placeholder.
    pub fn answer_for(&self, id: QuestionId) -> &str {
        self.entry(id)
            .map(SummaryEntry::display_answer)
            .unwrap_or(NO_ANSWER_PLACEHOLDER)
    }

    pub fn answered_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_answered()).count()
    }

    pub fn unanswered(&self) -> Vec<QuestionNumber> {
        self.entries
            .iter()
            .filter(|e| !e.is_answered())
            .map(|e| e.question_id.number())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::WizardStep;

    fn state_with(answers: &[(QuestionId, &str)]) -> WizardState {
        let mut state = WizardState::default();
        state.set_step(WizardStep::Summary);
        for (id, text) in answers {
            state.set_answer(*id, *text);
        }
        state
    }

    #[test]
    fn summary_lists_all_six_questions_in_order() {
        let summary = SummaryView::from_state(&WizardState::default());
        let numbers: Vec<u8> = summary.entries.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(summary.entries[0].label(), "1. Define & Clarify");
    }

    #[test]
    fn partial_answers_fill_gaps_with_placeholder() {
        let state = state_with(&[
            (QuestionId::Q1, "Choose a tracker"),
            (QuestionId::Q3, "GitHub integration"),
            (QuestionId::Q5, "Trial with two devs"),
        ]);
        let summary = SummaryView::from_state(&state);

        assert_eq!(summary.answer_for(QuestionId::Q1), "Choose a tracker");
        assert_eq!(summary.answer_for(QuestionId::Q3), "GitHub integration");
        assert_eq!(summary.answer_for(QuestionId::Q5), "Trial with two devs");
        assert_eq!(summary.answer_for(QuestionId::Q2), NO_ANSWER_PLACEHOLDER);
        assert_eq!(summary.answer_for(QuestionId::Q4), NO_ANSWER_PLACEHOLDER);
        assert_eq!(summary.answer_for(QuestionId::Q6), NO_ANSWER_PLACEHOLDER);
        assert_eq!(summary.answered_count(), 3);
        assert_eq!(
            summary.unanswered().iter().map(|n| n.get()).collect::<Vec<_>>(),
            vec![2, 4, 6]
        );
    }

    #[test]
    fn empty_answer_is_shown_as_placeholder() {
        let state = state_with(&[(QuestionId::Q2, "")]);
        let summary = SummaryView::from_state(&state);
        assert_eq!(summary.answer_for(QuestionId::Q2), NO_ANSWER_PLACEHOLDER);
        assert!(!summary.entry(QuestionId::Q2).unwrap().is_answered());
    }

    #[test]
    fn building_summary_does_not_mutate_state() {
        let state = state_with(&[(QuestionId::Q6, "Retro in two weeks")]);
        let before = state.clone();
        let _ = SummaryView::from_state(&state);
        assert_eq!(state, before);
    }
}
