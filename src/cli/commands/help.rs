//! The `help` command.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Static usage text.
pub const HELP_TEXT: &str = "\
EA Exam Practice Application

DESCRIPTION:
    A comprehensive study tool for the Enrolled Agent (EA) Special Enrollment Examination.
    Features 1000+ practice questions across three exam parts with official exam simulation.

EXAM STRUCTURE:
    Part 1: Individual Tax (400 questions)
    Part 2: Business Tax (400 questions)
    Part 3: Ethics & Procedures (200 questions)

FEATURES:
    • Practice Mode: Study all questions with unlimited time
    • Simulation Exam: Official 3-part timed exam experience
    • Progress tracking with detailed analytics
    • Question flagging and review system
    • Export functionality for study materials
    • Official EA exam structure and requirements

USAGE:
    ea-prep [command]

COMMANDS:
    start       Start the application (default)
    install     Install dependencies only
    help        Show this help message

CONFIGURATION:
    An optional ea-prep.yml in the project root can override the manifest,
    dependency directory, required tools, and the install and dev commands.

EXIT STATUS:
    0   Help was shown, or the application ran until it stopped
        (including Ctrl+C and dev server errors)
    1   The manifest or a required tool is missing, installing failed,
        the command is unknown, or ea-prep.yml could not be read

REQUIREMENTS:
    • Node.js (v18 or higher)
    • npm (Node Package Manager)
    • Modern web browser

STUDY GUIDANCE:
    • Recommended study time: 150-300 hours
    • Complete all three parts within 2-year window
    • 75% passing score required per part
    • Questions cover tax years 2021-2023

For more information, visit the GitHub repository or check the README.md file.";

/// The `help` command implementation.
///
/// Never touches the filesystem or external tools.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// Create the help command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(HELP_TEXT);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_all_three_exam_parts() {
        let mut ui = MockUI::new();
        let result = HelpCommand::new().execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message_containing("Part 1: Individual Tax"));
        assert!(ui.has_message_containing("Part 2: Business Tax"));
        assert!(ui.has_message_containing("Part 3: Ethics & Procedures"));
    }

    #[test]
    fn documents_exit_statuses() {
        assert!(HELP_TEXT.contains("EXIT STATUS:"));
        assert!(HELP_TEXT.contains("    0   "));
        assert!(HELP_TEXT.contains("    1   "));
        assert!(HELP_TEXT.contains("the command is unknown"));
    }

    #[test]
    fn lists_every_command() {
        for command in ["start", "install", "help"] {
            assert!(HELP_TEXT.contains(&format!("    {}", command)));
        }
    }
}
