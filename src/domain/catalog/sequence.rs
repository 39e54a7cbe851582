//! QuestionCatalog - The fixed, ordered list of the six questions.
//!
//! The catalog is immutable for the life of the process. Its order defines
//! step numbering: question 1 is the first step after the landing screen and
//! question 6 is the last step before the summary.
//!
//! # Order
//!
//! 1. Define & Clarify → 2. Measure & Options → 3. Analyze & Prioritize →
//! 4. Risk Review → 5. Improve & Execute → 6. Control & Retro
//!
//! # Usage
//!
//! ```ignore
//! use crate::domain::catalog::{QuestionCatalog, QuestionId};
//!
//! let first = QuestionCatalog::first();
//! let risk = QuestionCatalog::by_id(QuestionId::Q4);
//! assert_eq!(risk.step_title, "Risk Review");
//! ```

use super::question::{QuestionId, QuestionNumber, QUESTION_COUNT};

/// Display data for one question. Catalog-defined, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionDescriptor {
    pub id: QuestionId,
    pub step_title: &'static str,
    pub prompt: &'static str,
    pub guidance: &'static str,
    pub placeholder: &'static str,
}

/// Central location for the question sequence.
pub struct QuestionCatalog;

impl QuestionCatalog {
    /// The canonical question order.
    pub const QUESTIONS: [QuestionDescriptor; QUESTION_COUNT as usize] = [
        QuestionDescriptor {
            id: QuestionId::Q1,
            step_title: "Define & Clarify",
            prompt: "What decision or problem are you addressing?",
            guidance: "Lean/Agile Tip: Define this as a User Story: \"As a [role], I want [goal] so that [benefit]\". Avoid jumping to solutions yet.",
            placeholder: "e.g. As a team lead, I need to choose a new project management tool to improve sprint velocity...",
        },
        QuestionDescriptor {
            id: QuestionId::Q2,
            step_title: "Measure & Options",
            prompt: "What options or solutions are available right now?",
            guidance: "Lean/Agile Tip: Treat this as your \"Backlog\". List all potential solutions without judging them yet. Quantity leads to quality.",
            placeholder: "Option A: Upgrade current tool.\nOption B: Switch to Jira.\nOption C: Build custom tracker...",
        },
        QuestionDescriptor {
            id: QuestionId::Q3,
            step_title: "Analyze & Prioritize",
            prompt: "What matters most in your context\u{2014}criteria for success?",
            guidance: "Lean/Agile Tip: Think \"Acceptance Criteria\". What MUST happen for this to be a success? Rank by business value.",
            placeholder: "1. Must integrate with GitHub.\n2. Must cost under $50/mo.\n3. Must have mobile app...",
        },
        QuestionDescriptor {
            id: QuestionId::Q4,
            step_title: "Risk Review",
            prompt: "What risks or limitations could impact your choice?",
            guidance: "Lean/Agile Tip: Perform a mini \"Risk Review\". What could block this sprint? Technical debt? Learning curve?",
            placeholder: "Risk: Team might resist new workflow.\nLimitation: Budget approval takes 2 weeks...",
        },
        QuestionDescriptor {
            id: QuestionId::Q5,
            step_title: "Improve & Execute",
            prompt: "What immediate action or improvement will you take?",
            guidance: "Lean/Agile Tip: Define your \"MVP\" (Minimum Viable Product) or first iteration. What is the smallest step forward?",
            placeholder: "Action: Create a free trial account on Option B and test with 2 developers by Friday.",
        },
        QuestionDescriptor {
            id: QuestionId::Q6,
            step_title: "Control & Retro",
            prompt: "How will you assess success and adapt next time?",
            guidance: "Lean/Agile Tip: Plan your \"Retrospective\". How will you measure if this decision was right? (e.g. Metric: Cycle Time).",
            placeholder: "I will review team feedback in the next retrospective. Success = 20% reduction in meeting times.",
        },
    ];

    /// Returns all descriptors in order.
    pub fn all() -> &'static [QuestionDescriptor] {
        &Self::QUESTIONS
    }

    pub fn len() -> usize {
        Self::QUESTIONS.len()
    }

    /// Returns the descriptor at a 1-based position.
    pub fn get(number: QuestionNumber) -> &'static QuestionDescriptor {
        &Self::QUESTIONS[number.index()]
    }

    /// Returns the descriptor for an id.
    pub fn by_id(id: QuestionId) -> &'static QuestionDescriptor {
        Self::get(id.number())
    }

    pub fn first() -> &'static QuestionDescriptor {
        Self::get(QuestionNumber::first())
    }

    pub fn last() -> &'static QuestionDescriptor {
        Self::get(QuestionNumber::last())
    }

    /// Iterates `(number, descriptor)` pairs in catalog order.
    pub fn numbered() -> impl Iterator<Item = (QuestionNumber, &'static QuestionDescriptor)> {
        QuestionNumber::all().map(|n| (n, Self::get(n)))
    }
}
