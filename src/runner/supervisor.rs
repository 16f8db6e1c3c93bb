//! Foreground supervision of the development server.
//!
//! The server runs with inherited output and blocks the launcher until it
//! exits or the user presses Ctrl+C. Neither a user stop nor a server
//! failure is an error for the launcher itself; both are reported and the
//! run ends normally.

use std::path::Path;

use crate::shell::{ForegroundResult, ProcessRunner};
use crate::ui::UserInterface;

/// How a supervised run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The server exited with status zero.
    Exited,
    /// The user interrupted the server.
    StoppedByUser,
    /// The server could not start or exited non-zero.
    Failed(String),
}

/// Run the development server in the foreground until it ends.
pub fn start_application(
    runner: &dyn ProcessRunner,
    dev_command: &[String],
    project_root: &Path,
    ui: &mut dyn UserInterface,
) -> RunOutcome {
    ui.message("Starting EA Exam Practice Application...");
    ui.message("This will open the application in your default web browser.");
    ui.message("Press Ctrl+C to stop the application.");

    let outcome = match runner.run_foreground(dev_command, project_root) {
        Ok(ForegroundResult::Interrupted) => RunOutcome::StoppedByUser,
        Ok(ForegroundResult::Completed(result)) => match result.error_for(dev_command) {
            None => RunOutcome::Exited,
            Some(err) => RunOutcome::Failed(err.to_string()),
        },
        Err(err) => RunOutcome::Failed(err.to_string()),
    };

    match &outcome {
        RunOutcome::Exited => tracing::debug!("Development server exited cleanly"),
        RunOutcome::StoppedByUser => {
            ui.message("");
            ui.message("Application stopped by user.");
        }
        RunOutcome::Failed(detail) => {
            ui.error(&format!("Failed to start application: {}", detail));
        }
    }

    outcome
}
