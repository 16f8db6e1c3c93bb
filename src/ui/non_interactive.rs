//! Non-interactive UI for CI and piped output.

use super::theme::header_rule;
use super::{SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Plain text, no colors, no animated spinners. Errors go to stderr so they
/// survive when stdout is redirected.
#[derive(Debug, Default)]
pub struct NonInteractiveUI;

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("{}", message);
        Box::new(LineSpinner)
    }

    fn show_header(&mut self, title: &str) {
        println!("{}", title);
        println!("{}", header_rule());
    }
}

/// Spinner stand-in that prints only the final status line.
struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
