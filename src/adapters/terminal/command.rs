//! Parsing of terminal input lines into presentation commands.

use crate::domain::wizard::{WizardIntent, WizardStep};

/// What a line of input asks the presentation layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Forward to the controller as-is.
    Intent(WizardIntent),
    /// Add a line to the current answer.
    AppendLine(String),
    /// Ask for confirmation, then reset.
    Reset,
    Print,
    Help,
    Quit,
    /// Blank line: nothing to do.
    Empty,
    Unknown(String),
}

impl TerminalCommand {
    /// Parses one input line in the context of the step on screen.
    ///
    /// Words prefixed with `:` are commands everywhere. On a question step,
    /// any other text replaces the current answer, including `:` text that
    /// names no command; elsewhere the bare word is accepted as a command too.
    pub fn parse(line: &str, step: WizardStep) -> Self {
        let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return TerminalCommand::Empty;
        }

        let on_question = matches!(step, WizardStep::Question(_));
        let word = match trimmed.strip_prefix(':') {
            Some(rest) => rest,
            None if on_question => {
                return TerminalCommand::Intent(WizardIntent::EditAnswer(line.to_string()))
            }
            None => trimmed,
        };

        let (name, argument) = match word.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim_start()),
            None => (word, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "start" | "s" => TerminalCommand::Intent(WizardIntent::Start),
            "next" | "n" | "finish" => TerminalCommand::Intent(WizardIntent::Next),
            "back" | "b" => TerminalCommand::Intent(WizardIntent::Back),
            "edit" | "e" => TerminalCommand::Intent(WizardIntent::EditFromSummary),
            "clear" => TerminalCommand::Intent(WizardIntent::EditAnswer(String::new())),
            "add" | "a" => TerminalCommand::AppendLine(argument.to_string()),
            "reset" | "r" => TerminalCommand::Reset,
            "print" | "p" => TerminalCommand::Print,
            "help" | "h" | "?" => TerminalCommand::Help,
            "quit" | "q" | "exit" => TerminalCommand::Quit,
            // Answers may start with a colon too.
            _ if on_question => TerminalCommand::Intent(WizardIntent::EditAnswer(line.to_string())),
            _ => TerminalCommand::Unknown(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionNumber;

    fn question() -> WizardStep {
        WizardStep::Question(QuestionNumber::new(2).unwrap())
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(TerminalCommand::parse("\n", question()), TerminalCommand::Empty);
        assert_eq!(TerminalCommand::parse("   ", WizardStep::Landing), TerminalCommand::Empty);
    }

    #[test]
    fn text_on_question_step_edits_the_answer() {
        assert_eq!(
            TerminalCommand::parse("Option A: upgrade\n", question()),
            TerminalCommand::Intent(WizardIntent::EditAnswer("Option A: upgrade".into()))
        );
    }

    #[test]
    fn bare_words_on_question_step_are_answers_not_commands() {
        assert_eq!(
            TerminalCommand::parse("next", question()),
            TerminalCommand::Intent(WizardIntent::EditAnswer("next".into()))
        );
    }

    #[test]
    fn colon_commands_work_everywhere() {
        assert_eq!(
            TerminalCommand::parse(":next", question()),
            TerminalCommand::Intent(WizardIntent::Next)
        );
        assert_eq!(
            TerminalCommand::parse(":B", question()),
            TerminalCommand::Intent(WizardIntent::Back)
        );
        assert_eq!(TerminalCommand::parse(":reset", WizardStep::Summary), TerminalCommand::Reset);
        assert_eq!(TerminalCommand::parse(":q", question()), TerminalCommand::Quit);
    }

    #[test]
    fn bare_words_work_off_question_steps() {
        assert_eq!(
            TerminalCommand::parse("start", WizardStep::Landing),
            TerminalCommand::Intent(WizardIntent::Start)
        );
        assert_eq!(
            TerminalCommand::parse("edit", WizardStep::Summary),
            TerminalCommand::Intent(WizardIntent::EditFromSummary)
        );
        assert_eq!(TerminalCommand::parse("print", WizardStep::Summary), TerminalCommand::Print);
    }

    #[test]
    fn add_carries_its_argument() {
        assert_eq!(
            TerminalCommand::parse(":add Option C: build", question()),
            TerminalCommand::AppendLine("Option C: build".into())
        );
    }

    #[test]
    fn clear_empties_the_answer() {
        assert_eq!(
            TerminalCommand::parse(":clear", question()),
            TerminalCommand::Intent(WizardIntent::EditAnswer(String::new()))
        );
    }

    #[test]
    fn unrecognised_colon_text_on_question_step_is_an_answer() {
        assert_eq!(
            TerminalCommand::parse(":-) ship it\n", question()),
            TerminalCommand::Intent(WizardIntent::EditAnswer(":-) ship it".into()))
        );
        assert_eq!(
            TerminalCommand::parse(":todo", WizardStep::Summary),
            TerminalCommand::Unknown(":todo".into())
        );
    }

    #[test]
    fn unknown_words_are_reported() {
        assert_eq!(
            TerminalCommand::parse("dance", WizardStep::Landing),
            TerminalCommand::Unknown("dance".into())
        );
    }
}
