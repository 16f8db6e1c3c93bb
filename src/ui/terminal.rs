//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, LauncherTheme, NonInteractiveUI, ProgressSpinner, SpinnerHandle,
    UserInterface,
};

/// Interactive terminal UI implementation.
///
/// Errors go to stderr, everything else to stdout.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: LauncherTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            LauncherTheme::new()
        } else {
            LauncherTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::new(message))
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }
}

/// Create the appropriate UI for the environment.
pub fn create_ui(interactive: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new())
    } else {
        Box::new(NonInteractiveUI::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::TermTarget;

    #[test]
    fn errors_share_stderr_with_non_interactive_ui() {
        let ui = TerminalUI::new();
        assert!(matches!(ui.term.target(), TermTarget::Stdout));
        assert!(matches!(ui.err_term.target(), TermTarget::Stderr));
    }
}
