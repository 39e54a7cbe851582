//! WizardController - the single owner of the wizard state.
//!
//! Every mutation follows the same order: apply to the in-memory state,
//! persist the whole snapshot, then report a `WizardChange` so the
//! presentation layer can decide how much to redraw.

use std::sync::Arc;

use crate::domain::catalog::QuestionId;
use crate::domain::foundation::StateMachine;
use crate::domain::wizard::{
    StepView, SummaryView, WizardChange, WizardIntent, WizardProgress, WizardState, WizardStep,
};
use crate::ports::{StateStorage, StateStorageError};

/// Error type for controller operations.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// The intent has no transition from the current step.
    #[error("Intent '{intent}' is not allowed on {step}")]
    IntentNotAllowed {
        intent: &'static str,
        step: WizardStep,
    },

    /// The state changed in memory but could not be written.
    #[error("Failed to persist wizard state: {0}")]
    Storage(#[from] StateStorageError),
}

/// How `load_state` obtained the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A saved session was restored.
    Restored,
    /// Nothing was saved; the default state stands.
    Fresh,
    /// A saved blob existed but was unreadable; the default was installed.
    Recovered { reason: String },
}

/// Owns `WizardState` and applies intents to it.
pub struct WizardController {
    state: WizardState,
    storage: Arc<dyn StateStorage>,
}

impl WizardController {
    /// Creates a controller holding the default state. Nothing is loaded yet.
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self {
            state: WizardState::default(),
            storage,
        }
    }

    /// Creates a controller and restores any saved session.
    pub async fn initialize(storage: Arc<dyn StateStorage>) -> (Self, LoadOutcome) {
        let mut controller = Self::new(storage);
        let outcome = controller.load_state().await;
        (controller, outcome)
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step()
    }

    /// Render data for the current step.
    pub fn view(&self) -> StepView {
        StepView::from_state(&self.state)
    }

    /// Summary projection of the current answers. Never mutates.
    pub fn summary(&self) -> SummaryView {
        SummaryView::from_state(&self.state)
    }

    pub fn progress(&self) -> Option<WizardProgress> {
        self.current_step().question().map(WizardProgress::new)
    }

    /// Restores the saved state, falling back to the default.
    ///
    /// Never fails: a missing slot keeps the current state, an unreadable
    /// one is replaced by the default and the default is written back.
    pub async fn load_state(&mut self) -> LoadOutcome {
        match self.storage.load_state().await {
            Ok(state) => {
                tracing::debug!(step = %state.current_step(), answers = state.answers().len(), "Restored wizard state");
                self.state = state;
                LoadOutcome::Restored
            }
            Err(StateStorageError::NotFound(key)) => {
                tracing::debug!(key = %key, "No saved wizard state, starting fresh");
                LoadOutcome::Fresh
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved wizard state unreadable, resetting to defaults");
                self.state = WizardState::default();
                if let Err(save_err) = self.save_state().await {
                    tracing::warn!(error = %save_err, "Could not overwrite unreadable wizard state");
                }
                LoadOutcome::Recovered {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Writes the full snapshot to storage.
    pub async fn save_state(&self) -> Result<(), WizardError> {
        self.storage.save_state(&self.state).await?;
        Ok(())
    }

    /// Moves to `step` unconditionally and persists.
    ///
    /// This is the raw primitive behind the transition table; it does not
    /// check that `step` is reachable from the current one.
    pub async fn go_to_step(&mut self, step: WizardStep) -> Result<WizardChange, WizardError> {
        let from = self.state.current_step();
        self.state.set_step(step);
        self.save_state().await?;

        tracing::debug!(from = %from, to = %step, "Wizard step changed");
        Ok(WizardChange::StepChanged { from, to: step })
    }

    /// Overwrites the answer for `question_id` and persists. Does not move.
    pub async fn update_answer(
        &mut self,
        question_id: QuestionId,
        text: impl Into<String>,
    ) -> Result<WizardChange, WizardError> {
        self.state.set_answer(question_id, text);
        self.save_state().await?;

        tracing::debug!(question = %question_id, "Answer updated");
        Ok(WizardChange::AnswerChanged { question_id })
    }

    /// Discards all answers, returns to the landing step and persists.
    ///
    /// Asking the user for confirmation is the caller's job.
    pub async fn reset_state(&mut self) -> Result<WizardChange, WizardError> {
        let from = self.state.current_step();
        self.state = WizardState::default();
        self.save_state().await?;

        tracing::info!(from = %from, "Wizard state reset");
        Ok(WizardChange::Reset { from })
    }

    /// Applies a presentation-layer intent through the transition table.
    pub async fn dispatch(&mut self, intent: WizardIntent) -> Result<WizardChange, WizardError> {
        let from = self.state.current_step();
        let not_allowed = WizardError::IntentNotAllowed {
            intent: intent.name(),
            step: from,
        };

        match intent {
            WizardIntent::Reset => self.reset_state().await,
            WizardIntent::EditAnswer(text) => match from.question() {
                Some(number) => {
                    self.update_answer(QuestionId::from_number(number), text)
                        .await
                }
                None => Err(not_allowed),
            },
            other => match other.target(from).filter(|to| from.can_transition_to(to)) {
                Some(to) => self.go_to_step(to).await,
                None => Err(not_allowed),
            },
        }
    }
}
