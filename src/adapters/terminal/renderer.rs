//! Plain-text rendering of step views for the terminal.

use crate::domain::wizard::{
    QuestionView, StepView, SummaryView, WizardProgress, LANDING_SUBTITLE, LANDING_TITLE,
    SUMMARY_SUBTITLE, SUMMARY_TITLE,
};

const BAR_WIDTH: usize = 24;
const RULE: &str = "────────────────────────────────────────────────────────";

pub const RESET_CONFIRMATION: &str = "Start over? This will clear your current answers.";

/// Full-screen text for a step.
pub fn render(view: &StepView) -> String {
    match view {
        StepView::Landing => render_landing(),
        StepView::Question(q) => render_question(q),
        StepView::Summary(s) => render_summary(s),
    }
}

fn render_landing() -> String {
    format!(
        "{rule}\n{title}\n\n{subtitle}\n\nType `start` to begin a new session.\n{rule}\n",
        rule = RULE,
        title = LANDING_TITLE,
        subtitle = LANDING_SUBTITLE,
    )
}

fn render_question(q: &QuestionView) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "{}  {}\n\n",
        q.step_indicator(),
        progress_bar(&q.progress)
    ));
    out.push_str(&format!("{}\n", q.step_title));
    out.push_str(&format!("{}\n\n", q.prompt));
    out.push_str(&format!("AI Guidance: {}\n\n", q.guidance));

    if q.answer.is_empty() {
        out.push_str("Your answer (empty). For example:\n");
        out.push_str(&indent(q.placeholder));
    } else {
        out.push_str("Your answer:\n");
        out.push_str(&indent(&q.answer));
    }
    out.push('\n');

    out.push_str(&format!(
        "Type to replace the answer, `:add <text>` for another line.\n:back  :next ({})\n",
        q.next_label()
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

fn render_summary(summary: &SummaryView) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{}\n{}\n\n", SUMMARY_TITLE, SUMMARY_SUBTITLE));

    for entry in &summary.entries {
        out.push_str(&format!("{}\n", entry.label()));
        out.push_str(&indent(entry.display_answer()));
        out.push('\n');
    }

    out.push_str(":edit (Edit Answers)  :print (Print / Save PDF)\n");
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Help text listing every command.
pub fn render_help() -> String {
    [
        "Commands:",
        "  start          begin a new session (landing screen)",
        "  :next / :back  move between questions",
        "  :add <text>    append a line to the current answer",
        "  :clear         empty the current answer",
        "  :edit          go back to the first question (summary)",
        "  :print         write a printable copy of the summary",
        "  :reset         start over, clearing all answers",
        "  :quit          leave; progress is already saved",
        "",
    ]
    .join("\n")
}

fn progress_bar(progress: &WizardProgress) -> String {
    let filled = (progress.fraction() * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        progress.percent()
    )
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("    {}\n", line)).collect()
}
