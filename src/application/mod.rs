//! Application layer - the wizard controller.
//!
//! This layer orchestrates domain operations and coordinates with ports.
//! It is the only place that mutates `WizardState`.

mod wizard_controller;

pub use wizard_controller::{LoadOutcome, WizardController, WizardError};
