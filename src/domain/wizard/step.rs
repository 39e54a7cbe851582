//! WizardStep - the closed set of screens and the transition table between them.
//!
//! Persisted as a single integer: 0 is the landing screen, 1..=6 are the
//! questions, 7 is the summary. No other value is representable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::{QuestionNumber, QUESTION_COUNT};
use crate::domain::foundation::{StateMachine, ValidationError};

const LANDING_INDEX: u8 = 0;
const SUMMARY_INDEX: u8 = QUESTION_COUNT + 1;

/// One screen of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WizardStep {
    #[default]
    Landing,
    Question(QuestionNumber),
    Summary,
}

impl WizardStep {
    /// Step reached by `start`.
    pub fn start() -> Self {
        WizardStep::Question(QuestionNumber::first())
    }

    /// Target of the "next" trigger, if the step has one.
    ///
    /// The last question advances to the summary, never past it.
    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Question(n) => Some(match n.next() {
                Some(following) => WizardStep::Question(following),
                None => WizardStep::Summary,
            }),
            WizardStep::Landing | WizardStep::Summary => None,
        }
    }

    /// Target of the "back" trigger, if the step has one.
    ///
    /// The first question goes back to the landing screen.
    pub fn back(&self) -> Option<Self> {
        match self {
            WizardStep::Question(n) => Some(match n.previous() {
                Some(preceding) => WizardStep::Question(preceding),
                None => WizardStep::Landing,
            }),
            WizardStep::Landing | WizardStep::Summary => None,
        }
    }

    /// Integer encoding used in the persisted blob.
    pub fn index(&self) -> u8 {
        match self {
            WizardStep::Landing => LANDING_INDEX,
            WizardStep::Question(n) => n.get(),
            WizardStep::Summary => SUMMARY_INDEX,
        }
    }

    pub fn from_index(index: u8) -> Result<Self, ValidationError> {
        match index {
            LANDING_INDEX => Ok(WizardStep::Landing),
            SUMMARY_INDEX => Ok(WizardStep::Summary),
            n if n < SUMMARY_INDEX => Ok(WizardStep::Question(QuestionNumber::new(n)?)),
            n => Err(ValidationError::out_of_range(
                "current_step",
                LANDING_INDEX as i64,
                SUMMARY_INDEX as i64,
                n as i64,
            )),
        }
    }

    pub fn question(&self) -> Option<QuestionNumber> {
        match self {
            WizardStep::Question(n) => Some(*n),
            _ => None,
        }
    }

    /// All eight steps in index order.
    pub fn all() -> Vec<WizardStep> {
        (LANDING_INDEX..=SUMMARY_INDEX)
            .filter_map(|i| WizardStep::from_index(i).ok())
            .collect()
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        // Reset returns to the landing screen from anywhere.
        let mut targets = match self {
            WizardStep::Landing => vec![WizardStep::start()],
            WizardStep::Question(_) => self.back().into_iter().chain(self.next()).collect(),
            WizardStep::Summary => vec![WizardStep::start()],
        };
        if !targets.contains(&WizardStep::Landing) {
            targets.push(WizardStep::Landing);
        }
        targets
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        WizardStep::from_index(value)
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.index()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::Landing => f.write_str("landing"),
            WizardStep::Question(n) => write!(f, "question {}", n),
            WizardStep::Summary => f.write_str("summary"),
        }
    }
}
