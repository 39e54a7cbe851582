//! TerminalSession - the event loop driving the wizard from text input.
//!
//! Reads one line at a time, turns it into a command, and hands intents to
//! the controller. Each intent is awaited to completion before the next
//! line is read.

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::command::TerminalCommand;
use super::renderer::{self, RESET_CONFIRMATION};
use crate::application::{WizardController, WizardError};
use crate::domain::wizard::{StepView, WizardChange, WizardIntent, WizardStep};
use crate::ports::SummaryPrinter;

const PROMPT: &str = "> ";

/// Line-oriented presentation layer over any async reader and writer.
pub struct TerminalSession<R, W> {
    controller: WizardController,
    printer: Arc<dyn SummaryPrinter>,
    input: R,
    output: W,
}

impl<R, W> TerminalSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        controller: WizardController,
        printer: Arc<dyn SummaryPrinter>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            controller,
            printer,
            input,
            output,
        }
    }

    /// Runs until `:quit` or end of input, then hands the controller back.
    pub async fn run(mut self) -> io::Result<(WizardController, W)> {
        tracing::info!(step = %self.controller.current_step(), "Terminal session started");
        self.render_screen().await?;

        loop {
            self.write(PROMPT).await?;
            let Some(line) = self.read_line().await? else {
                break;
            };

            match TerminalCommand::parse(&line, self.controller.current_step()) {
                TerminalCommand::Empty => {}
                TerminalCommand::Quit => break,
                TerminalCommand::Help => self.write(&renderer::render_help()).await?,
                TerminalCommand::Intent(intent) => self.apply(intent).await?,
                TerminalCommand::AppendLine(text) => self.append_line(text).await?,
                TerminalCommand::Reset => self.confirm_reset().await?,
                TerminalCommand::Print => self.print().await?,
                TerminalCommand::Unknown(word) => {
                    self.write(&format!("Unknown command `{}`. Type :help for a list.\n", word))
                        .await?
                }
            }
        }

        self.write("Progress saved. Goodbye.\n").await?;
        self.output.flush().await?;
        tracing::info!(step = %self.controller.current_step(), "Terminal session ended");
        Ok((self.controller, self.output))
    }

    async fn apply(&mut self, intent: WizardIntent) -> io::Result<()> {
        match self.controller.dispatch(intent).await {
            Ok(change) => self.show_change(change).await,
            Err(WizardError::IntentNotAllowed { intent, step }) => {
                self.write(&format!("`{}` is not available on the {} screen.\n", intent, step))
                    .await
            }
            Err(err @ WizardError::Storage(_)) => {
                tracing::error!(error = %err, "Wizard change not persisted");
                self.write("Warning: your progress could not be saved.\n").await
            }
        }
    }

    async fn show_change(&mut self, change: WizardChange) -> io::Result<()> {
        if change.requires_full_render() {
            self.render_screen().await
        } else {
            self.write("Saved.\n").await
        }
    }

    async fn append_line(&mut self, text: String) -> io::Result<()> {
        let StepView::Question(view) = self.controller.view() else {
            return self.apply(WizardIntent::EditAnswer(text)).await;
        };
        let combined = if view.answer.is_empty() {
            text
        } else {
            format!("{}\n{}", view.answer, text)
        };
        self.apply(WizardIntent::EditAnswer(combined)).await
    }

    async fn confirm_reset(&mut self) -> io::Result<()> {
        self.write(&format!("{} [y/N] ", RESET_CONFIRMATION)).await?;
        let answer = self.read_line().await?.unwrap_or_default();

        if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            self.apply(WizardIntent::Reset).await
        } else {
            self.write("Nothing was cleared.\n").await
        }
    }

    async fn print(&mut self) -> io::Result<()> {
        if self.controller.current_step() != WizardStep::Summary {
            return self
                .write("Printing is available from the summary screen.\n")
                .await;
        }

        match self.printer.print(&self.controller.summary()).await {
            Ok(printed) => {
                self.write(&format!(
                    "Summary written to {} (open it and print, or save as PDF).\n",
                    printed.html_path.display()
                ))
                .await
            }
            Err(err) => {
                tracing::error!(error = %err, "Printing the summary failed");
                self.write(&format!("Could not print the summary: {}\n", err))
                    .await
            }
        }
    }

    async fn render_screen(&mut self) -> io::Result<()> {
        let screen = renderer::render(&self.controller.view());
        self.write(&screen).await
    }

    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).await?;
        Ok((read > 0).then_some(line))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStateStorage;
    use crate::domain::catalog::{QuestionId, QuestionNumber};
    use crate::domain::wizard::SummaryView;
    use crate::ports::{PrintError, PrintedSummary, StateStorage};
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPrinter {
        printed: Mutex<Vec<SummaryView>>,
    }

    #[async_trait]
    impl SummaryPrinter for RecordingPrinter {
        async fn print(&self, summary: &SummaryView) -> Result<PrintedSummary, PrintError> {
            self.printed.lock().unwrap().push(summary.clone());
            Ok(PrintedSummary {
                markdown_path: PathBuf::from("/tmp/decision-summary.md"),
                html_path: PathBuf::from("/tmp/decision-summary.html"),
            })
        }
    }

    async fn run_script(
        storage: &InMemoryStateStorage,
        printer: Arc<RecordingPrinter>,
        script: &str,
    ) -> (WizardController, String) {
        let (controller, _) = WizardController::initialize(Arc::new(storage.clone())).await;
        let session = TerminalSession::new(controller, printer, script.as_bytes(), Vec::new());
        let (controller, output) = session.run().await.unwrap();
        (controller, String::from_utf8(output).unwrap())
    }

    fn q(n: u8) -> WizardStep {
        WizardStep::Question(QuestionNumber::new(n).unwrap())
    }

    #[tokio::test]
    async fn scripted_walk_through_reaches_summary() {
        let storage = InMemoryStateStorage::new();
        let script = "start\nChoose a tracker\n:next\n:next\nGitHub integration\n:next\n:next\n:next\n:next\n";

        let (controller, output) =
            run_script(&storage, Arc::new(RecordingPrinter::default()), script).await;

        assert_eq!(controller.current_step(), WizardStep::Summary);
        assert!(output.contains("Decision Summary"));
        assert!(output.contains("1. Define & Clarify\n    Choose a tracker\n"));
        assert!(output.contains("3. Analyze & Prioritize\n    GitHub integration\n"));
        assert!(output.contains("Saved."));

        let saved = storage.load_state().await.unwrap();
        assert_eq!(saved.current_step(), WizardStep::Summary);
        assert_eq!(saved.answer(QuestionId::Q1), Some("Choose a tracker"));
    }

    #[tokio::test]
    async fn add_builds_multiline_answer() {
        let storage = InMemoryStateStorage::new();
        let script = "start\n:next\nOption A\n:add Option B\n";

        let (controller, _) =
            run_script(&storage, Arc::new(RecordingPrinter::default()), script).await;

        assert_eq!(
            controller.state().answer(QuestionId::Q2),
            Some("Option A\nOption B")
        );
    }

    #[tokio::test]
    async fn reset_requires_confirmation() {
        let storage = InMemoryStateStorage::new();
        let script = "start\nanswer\n:reset\nn\n";

        let (controller, output) =
            run_script(&storage, Arc::new(RecordingPrinter::default()), script).await;

        assert!(output.contains(RESET_CONFIRMATION));
        assert!(output.contains("Nothing was cleared."));
        assert_eq!(controller.current_step(), q(1));
        assert_eq!(controller.state().answer(QuestionId::Q1), Some("answer"));
    }

    #[tokio::test]
    async fn confirmed_reset_clears_everything() {
        let storage = InMemoryStateStorage::new();
        let script = "start\nanswer\n:next\n:reset\nyes\n";

        let (controller, _) =
            run_script(&storage, Arc::new(RecordingPrinter::default()), script).await;

        assert!(controller.state().is_default());
        assert!(storage.load_state().await.unwrap().is_default());
    }

    #[tokio::test]
    async fn print_hands_summary_to_printer_only_on_summary() {
        let storage = InMemoryStateStorage::new();
        let printer = Arc::new(RecordingPrinter::default());
        let script = ":print\nstart\n:q\n";

        let (_, output) = run_script(&storage, printer.clone(), script).await;
        assert!(output.contains("Printing is available from the summary screen."));
        assert!(printer.printed.lock().unwrap().is_empty());

        storage
            .put_raw(r#"{"currentStep":7,"answers":{"q4":"Budget"}}"#)
            .await;
        let (_, output) = run_script(&storage, printer.clone(), "print\n").await;

        assert!(output.contains("/tmp/decision-summary.html"));
        let printed = printer.printed.lock().unwrap();
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].answer_for(QuestionId::Q4), "Budget");
    }

    #[tokio::test]
    async fn not_allowed_intent_is_explained() {
        let storage = InMemoryStateStorage::new();

        let (controller, output) =
            run_script(&storage, Arc::new(RecordingPrinter::default()), ":next\n").await;

        assert!(output.contains("`next` is not available on the landing screen."));
        assert_eq!(controller.current_step(), WizardStep::Landing);
    }

    #[tokio::test]
    async fn session_resumes_saved_step() {
        let storage = InMemoryStateStorage::with_raw(r#"{"currentStep":5,"answers":{}}"#);

        let (controller, output) =
            run_script(&storage, Arc::new(RecordingPrinter::default()), ":quit\n").await;

        assert_eq!(controller.current_step(), q(5));
        assert!(output.contains("Step 5 of 6"));
        assert!(output.ends_with("Progress saved. Goodbye.\n"));
    }
}
