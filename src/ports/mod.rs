//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the wizard core and the outside world. Adapters implement these ports.
//!
//! - `StateStorage` - the single persisted state slot
//! - `SummaryPrinter` - the print collaborator used by the presentation layer

mod state_storage;
mod summary_printer;

pub use state_storage::{StateStorage, StateStorageError};
pub use summary_printer::{PrintError, PrintedSummary, SummaryPrinter};
