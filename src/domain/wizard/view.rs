//! StepView - everything the presentation layer needs to draw the current step.

use super::progress::WizardProgress;
use super::state::WizardState;
use super::step::WizardStep;
use super::summary::SummaryView;
use crate::domain::catalog::{QuestionCatalog, QuestionId, QuestionNumber, QUESTION_COUNT};

pub const LANDING_TITLE: &str = "Clarify. Decide. Execute.";
pub const LANDING_SUBTITLE: &str =
    "An intelligent decision-support assistant combining Lean Six Sigma discipline with Agile adaptability.";
pub const NEXT_LABEL: &str = "Next Step";
pub const FINISH_LABEL: &str = "Finish & Review";

/// Render data for a question step.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub number: QuestionNumber,
    pub total: u8,
    pub question_id: QuestionId,
    pub step_title: &'static str,
    pub prompt: &'static str,
    pub guidance: &'static str,
    pub placeholder: &'static str,
    /// Current answer, empty when unanswered.
    pub answer: String,
    pub is_final: bool,
    pub progress: WizardProgress,
}

impl QuestionView {
    fn build(number: QuestionNumber, state: &WizardState) -> Self {
        let q = QuestionCatalog::get(number);
        Self {
            number,
            total: QUESTION_COUNT,
            question_id: q.id,
            step_title: q.step_title,
            prompt: q.prompt,
            guidance: q.guidance,
            placeholder: q.placeholder,
            answer: state.answer(q.id).unwrap_or_default().to_string(),
            is_final: number.is_last(),
            progress: WizardProgress::new(number),
        }
    }

    /// Label of the forward button; the last question finishes instead.
    pub fn next_label(&self) -> &'static str {
        if self.is_final {
            FINISH_LABEL
        } else {
            NEXT_LABEL
        }
    }

    /// Header text, e.g. `"Step 3 of 6"`.
    pub fn step_indicator(&self) -> String {
        format!("Step {} of {}", self.number, self.total)
    }
}

/// Snapshot of the screen for the current step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepView {
    Landing,
    Question(QuestionView),
    Summary(SummaryView),
}

impl StepView {
    pub fn from_state(state: &WizardState) -> Self {
        match state.current_step() {
            WizardStep::Landing => StepView::Landing,
            WizardStep::Question(n) => StepView::Question(QuestionView::build(n, state)),
            WizardStep::Summary => StepView::Summary(SummaryView::from_state(state)),
        }
    }
}
