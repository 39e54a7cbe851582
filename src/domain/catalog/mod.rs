//! Question catalog - the static, ordered question data.

mod question;
mod sequence;

pub use question::{QuestionId, QuestionNumber, QUESTION_COUNT};
pub use sequence::{QuestionCatalog, QuestionDescriptor};
