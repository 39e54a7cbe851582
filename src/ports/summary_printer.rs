//! Summary Printer Port - the print collaborator.
//!
//! Printing is owned by the presentation side. The controller never calls
//! this port; the presentation layer hands it a `SummaryView` snapshot.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::wizard::SummaryView;

/// Port for producing a printable copy of the summary.
#[async_trait]
pub trait SummaryPrinter: Send + Sync {
    /// Render the summary and store the printable output.
    ///
    /// # Errors
    ///
    /// Returns `PrintError` if the output cannot be written.
    async fn print(&self, summary: &SummaryView) -> Result<PrintedSummary, PrintError>;
}

/// Where the printable copies ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedSummary {
    pub markdown_path: PathBuf,
    pub html_path: PathBuf,
}

/// Errors from the print collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrintError {
    #[error("Failed to write printable summary: {0}")]
    WriteFailed(String),
}
