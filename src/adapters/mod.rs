//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the wizard core to the outside world:
//! - `storage` - file and in-memory state storage
//! - `print` - Markdown/HTML summary printer
//! - `terminal` - text presentation layer and event loop

pub mod print;
pub mod storage;
pub mod terminal;

pub use print::MarkdownSummaryPrinter;
pub use storage::{FileStateStorage, InMemoryStateStorage};
pub use terminal::TerminalSession;
