//! Intents raised by the presentation layer and the changes they produce.

use serde::Serialize;

use super::step::WizardStep;
use crate::domain::catalog::QuestionId;

/// A user intent the controller understands.
///
/// Printing is handled entirely by the presentation layer and has no intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardIntent {
    Start,
    Back,
    Next,
    /// Replace the answer for the question currently on screen.
    EditAnswer(String),
    EditFromSummary,
    Reset,
}

impl WizardIntent {
    pub fn name(&self) -> &'static str {
        match self {
            WizardIntent::Start => "start",
            WizardIntent::Back => "back",
            WizardIntent::Next => "next",
            WizardIntent::EditAnswer(_) => "edit_answer",
            WizardIntent::EditFromSummary => "edit_from_summary",
            WizardIntent::Reset => "reset",
        }
    }

    /// Step the intent leads to from `from`, or None if it is not legal there.
    ///
    /// `EditAnswer` keeps the current step and is legal on question steps only.
    pub fn target(&self, from: WizardStep) -> Option<WizardStep> {
        match (self, from) {
            (WizardIntent::Start, WizardStep::Landing) => Some(WizardStep::start()),
            (WizardIntent::Back, step) => step.back(),
            (WizardIntent::Next, step) => step.next(),
            (WizardIntent::EditAnswer(_), step @ WizardStep::Question(_)) => Some(step),
            (WizardIntent::EditFromSummary, WizardStep::Summary) => Some(WizardStep::start()),
            (WizardIntent::Reset, _) => Some(WizardStep::Landing),
            _ => None,
        }
    }
}

/// What an applied operation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardChange {
    StepChanged { from: WizardStep, to: WizardStep },
    AnswerChanged { question_id: QuestionId },
    Reset { from: WizardStep },
}

impl WizardChange {
    /// True when the presentation layer should redraw the whole screen.
    ///
    /// Answer edits are already reflected by the input that produced them.
    pub fn requires_full_render(&self) -> bool {
        !matches!(self, WizardChange::AnswerChanged { .. })
    }

    /// Step on screen after the change, when it moved.
    pub fn new_step(&self) -> Option<WizardStep> {
        match self {
            WizardChange::StepChanged { to, .. } => Some(*to),
            WizardChange::Reset { .. } => Some(WizardStep::Landing),
            WizardChange::AnswerChanged { .. } => None,
        }
    }
}
