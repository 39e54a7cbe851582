//! Wizard model - steps, state, intents and the views derived from them.
//!
//! Everything here is pure: no storage, no terminal, no clock.

mod intent;
mod progress;
mod state;
mod step;
mod summary;
mod view;

pub use intent::{WizardChange, WizardIntent};
pub use progress::WizardProgress;
pub use state::WizardState;
pub use step::WizardStep;
pub use summary::{
    SummaryEntry, SummaryView, NO_ANSWER_PLACEHOLDER, SUMMARY_SUBTITLE, SUMMARY_TITLE,
};
pub use view::{
    QuestionView, StepView, FINISH_LABEL, LANDING_SUBTITLE, LANDING_TITLE, NEXT_LABEL,
};
