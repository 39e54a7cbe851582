//! Print Adapters
//!
//! Implementations of the SummaryPrinter port.

mod markdown_summary_printer;

pub use markdown_summary_printer::MarkdownSummaryPrinter;
