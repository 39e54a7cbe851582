//! Six Questions - a guided six-step decision wizard
//!
//! This crate walks a user through six fixed planning questions, keeps the
//! answers in a single persisted state slot, and produces a printable
//! decision summary.
//!
//! Layers:
//! - `domain` - question catalog, wizard steps, state and derived views
//! - `ports` - storage and printing interfaces
//! - `adapters` - file/in-memory storage, Markdown/HTML printer, terminal UI
//! - `application` - the controller owning the wizard state

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
