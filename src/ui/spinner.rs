//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::{should_use_colors, LauncherTheme};
use super::SpinnerHandle;

/// A progress spinner for short blocking operations such as tool probes.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: LauncherTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme: theme(),
        }
    }

    fn finish_with(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

fn theme() -> LauncherTheme {
    if should_use_colors() {
        LauncherTheme::new()
    } else {
        LauncherTheme::plain()
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishing_stops_the_bar() {
        let mut spinner = ProgressSpinner {
            bar: ProgressBar::hidden(),
            theme: LauncherTheme::plain(),
        };
        spinner.finish_success("Requirements satisfied");
        assert!(spinner.bar.is_finished());
    }
}
