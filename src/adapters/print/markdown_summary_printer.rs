//! Markdown/HTML summary printer.
//!
//! Renders the summary as a Markdown document and converts it to a
//! standalone, print-ready HTML page with pulldown-cmark. Both files are
//! written to the output directory, replacing earlier copies.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Options, Parser};
use tokio::fs;

use crate::domain::wizard::{SummaryView, SUMMARY_SUBTITLE, SUMMARY_TITLE};
use crate::ports::{PrintError, PrintedSummary, SummaryPrinter};

const DEFAULT_FILE_STEM: &str = "decision-summary";

/// Print collaborator producing `<stem>.md` and `<stem>.html`.
#[derive(Debug, Clone)]
pub struct MarkdownSummaryPrinter {
    output_dir: PathBuf,
    file_stem: String,
}

impl MarkdownSummaryPrinter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }

    /// Use a different file name stem.
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    pub fn markdown_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.md", self.file_stem))
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.html", self.file_stem))
    }

    /// Renders the summary as Markdown.
    pub fn render_markdown(&self, summary: &SummaryView, generated_at: DateTime<Utc>) -> String {
        let mut doc = format!("# {}\n\n", SUMMARY_TITLE);
        doc.push_str(&format!("*{}*\n\n", SUMMARY_SUBTITLE));
        doc.push_str(&format!(
            "Generated {}\n\n",
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        for entry in &summary.entries {
            doc.push_str(&format!("## {}\n\n", escape_text(&entry.label())));
            doc.push_str(&format!("**{}**\n\n", escape_text(entry.prompt)));

            if entry.is_answered() {
                // Keep the user's line breaks as hard breaks.
                let body = entry
                    .display_answer()
                    .lines()
                    .map(escape_text)
                    .collect::<Vec<_>>()
                    .join("  \n");
                doc.push_str(&body);
            } else {
                doc.push_str(&format!("*{}*", entry.display_answer()));
            }
            doc.push_str("\n\n");
        }

        doc
    }

    /// Converts the Markdown document to a complete HTML page.
    pub fn render_html(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(markdown, options);

        let mut body = String::new();
        html::push_html(&mut body, parser);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="summary-view">
{body}
    </article>
</body>
</html>"#,
            title = SUMMARY_TITLE,
            css = PRINT_CSS,
            body = body
        )
    }

    async fn write(&self, path: &Path, contents: &str) -> Result<(), PrintError> {
        fs::write(path, contents)
            .await
            .map_err(|e| PrintError::WriteFailed(format!("{}: {}", path.display(), e)))
    }
}

#[async_trait]
impl SummaryPrinter for MarkdownSummaryPrinter {
    async fn print(&self, summary: &SummaryView) -> Result<PrintedSummary, PrintError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| PrintError::WriteFailed(e.to_string()))?;

        let markdown = self.render_markdown(summary, Utc::now());
        let html = self.render_html(&markdown);

        let printed = PrintedSummary {
            markdown_path: self.markdown_path(),
            html_path: self.html_path(),
        };
        self.write(&printed.markdown_path, &markdown).await?;
        self.write(&printed.html_path, &html).await?;

        tracing::info!(html = %printed.html_path.display(), "Printed decision summary");
        Ok(printed)
    }
}

/// Escapes characters that would otherwise become raw HTML.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const PRINT_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    line-height: 1.6;
    color: #1f2937;
    max-width: 48rem;
    margin: 2rem auto;
    padding: 0 1rem;
}
h1 { text-align: center; margin-bottom: 0.25rem; }
h2 { border-bottom: 1px solid #e5e7eb; padding-bottom: 0.25rem; margin-top: 2rem; }
em { color: #6b7280; }
@media print {
    body { margin: 0; max-width: none; }
    h2 { page-break-after: avoid; }
}
"#;
