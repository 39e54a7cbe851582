//! Question identity: the 1-based position and the stable string id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of questions in the catalog.
pub const QUESTION_COUNT: u8 = 6;

/// 1-based position of a question within the catalog (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionNumber(u8);

impl QuestionNumber {
    /// Creates a question number, rejecting anything outside 1..=6.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (1..=QUESTION_COUNT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "question_number",
                1,
                QUESTION_COUNT as i64,
                value as i64,
            ))
        }
    }

    pub const fn first() -> Self {
        Self(1)
    }

    pub const fn last() -> Self {
        Self(QUESTION_COUNT)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// 0-based index into the catalog.
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn is_first(&self) -> bool {
        self.0 == 1
    }

    pub fn is_last(&self) -> bool {
        self.0 == QUESTION_COUNT
    }

    /// Returns the following question, or None on the last one.
    pub fn next(&self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    /// Returns the preceding question, or None on the first one.
    pub fn previous(&self) -> Option<Self> {
        if self.is_first() {
            None
        } else {
            Some(Self(self.0 - 1))
        }
    }

    /// Iterates over all question numbers in catalog order.
    pub fn all() -> impl Iterator<Item = QuestionNumber> {
        (1..=QUESTION_COUNT).map(QuestionNumber)
    }
}

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable question identifier used as the key of persisted answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
}

impl QuestionId {
    const ALL: [QuestionId; QUESTION_COUNT as usize] = [
        QuestionId::Q1,
        QuestionId::Q2,
        QuestionId::Q3,
        QuestionId::Q4,
        QuestionId::Q5,
        QuestionId::Q6,
    ];

    pub fn all() -> &'static [QuestionId] {
        &Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Q1 => "q1",
            QuestionId::Q2 => "q2",
            QuestionId::Q3 => "q3",
            QuestionId::Q4 => "q4",
            QuestionId::Q5 => "q5",
            QuestionId::Q6 => "q6",
        }
    }

    /// The catalog position this id belongs to.
    pub fn number(&self) -> QuestionNumber {
        let pos = Self::ALL.iter().position(|id| id == self).unwrap_or(0);
        QuestionNumber(pos as u8 + 1)
    }

    pub fn from_number(number: QuestionNumber) -> Self {
        Self::ALL[number.index()]
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("question_id", format!("unknown id '{}'", s))
            })
    }
}
