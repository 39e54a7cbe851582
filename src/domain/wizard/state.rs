//! WizardState - the only mutable record in the system.
//!
//! Serialized wholesale as `{"currentStep": 0..7, "answers": {"q1": "..."}}`.
//! Parsing is tolerant of unknown fields and unknown answer keys so that
//! blobs written by older or newer builds still load.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::step::WizardStep;
use crate::domain::catalog::QuestionId;
use crate::domain::foundation::ValidationError;

/// Current step plus the answers given so far.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PersistedWizardState")]
pub struct WizardState {
    current_step: WizardStep,
    answers: BTreeMap<QuestionId, String>,
}

impl WizardState {
    pub fn new(current_step: WizardStep, answers: BTreeMap<QuestionId, String>) -> Self {
        Self {
            current_step,
            answers,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn answers(&self) -> &BTreeMap<QuestionId, String> {
        &self.answers
    }

    /// The stored answer, if the question has been answered at all.
    pub fn answer(&self, id: QuestionId) -> Option<&str> {
        self.answers.get(&id).map(String::as_str)
    }

    pub fn is_default(&self) -> bool {
        *self == WizardState::default()
    }

    pub fn set_step(&mut self, step: WizardStep) {
        self.current_step = step;
    }

    /// Overwrites the answer for `id`. Returns false when the text was already stored.
    pub fn set_answer(&mut self, id: QuestionId, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.answer(id) == Some(text.as_str()) {
            return false;
        }
        self.answers.insert(id, text);
        true
    }
}

/// Wire shape accepted when loading a persisted blob.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedWizardState {
    #[serde(default)]
    current_step: u8,
    #[serde(default)]
    answers: HashMap<String, String>,
}

impl TryFrom<PersistedWizardState> for WizardState {
    type Error = ValidationError;

    fn try_from(raw: PersistedWizardState) -> Result<Self, Self::Error> {
        let current_step = WizardStep::from_index(raw.current_step)?;
        let answers = raw
            .answers
            .into_iter()
            .filter_map(|(key, text)| match key.parse::<QuestionId>() {
                Ok(id) => Some((id, text)),
                Err(_) => {
                    tracing::debug!(key = %key, "Dropping answer for unknown question id");
                    None
                }
            })
            .collect();

        Ok(WizardState {
            current_step,
            answers,
        })
    }
}
