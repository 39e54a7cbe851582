//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, state machine trait)
//! - `catalog` - The fixed, ordered question catalog
//! - `wizard` - Steps, state, intents, change descriptors and views

pub mod catalog;
pub mod foundation;
pub mod wizard;
