use std::sync::Arc;

use tokio::io::{stdin, stdout, BufReader};

use six_questions::adapters::{FileStateStorage, MarkdownSummaryPrinter, TerminalSession};
use six_questions::application::{LoadOutcome, WizardController};
use six_questions::config::AppConfig;
use six_questions::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging)?;

    let storage = FileStateStorage::with_key(&config.storage.data_dir, &config.storage.state_key);
    let (controller, outcome) = WizardController::initialize(Arc::new(storage)).await;
    if let LoadOutcome::Recovered { reason } = &outcome {
        tracing::warn!(reason = %reason, "Started from defaults after an unreadable save");
    }

    let printer = MarkdownSummaryPrinter::new(&config.storage.data_dir);
    let session = TerminalSession::new(
        controller,
        Arc::new(printer),
        BufReader::new(stdin()),
        stdout(),
    );
    session.run().await?;

    Ok(())
}
