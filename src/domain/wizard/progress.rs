//! WizardProgress value object - linear progress across the question steps.

use crate::domain::catalog::{QuestionNumber, QUESTION_COUNT};

/// Progress shown while on question `n`: `(n - 1) / 6` of the way through.
///
/// Landing is excluded, so the first question shows zero progress and the
/// last shows five sixths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardProgress {
    current: QuestionNumber,
}

impl WizardProgress {
    pub fn new(current: QuestionNumber) -> Self {
        Self { current }
    }

    pub fn current(&self) -> QuestionNumber {
        self.current
    }

    pub fn total(&self) -> u8 {
        QUESTION_COUNT
    }

    /// Questions already behind the user.
    pub fn completed(&self) -> u8 {
        self.current.get() - 1
    }

    pub fn fraction(&self) -> f64 {
        f64::from(self.completed()) / f64::from(QUESTION_COUNT)
    }

    /// Whole-number percentage, rounded down.
    pub fn percent(&self) -> u8 {
        ((u32::from(self.completed()) * 100) / u32::from(QUESTION_COUNT)) as u8
    }
}
