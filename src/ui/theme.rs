//! Visual theme and styling.

use console::Style;

use super::HEADER_RULE_WIDTH;

/// The launcher's visual theme.
#[derive(Debug, Clone)]
pub struct LauncherTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for LauncherTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LauncherTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format the banner: title over a rule of `=`.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{}\n{}",
            self.header.apply_to(title),
            self.dim.apply_to(header_rule())
        )
    }
}

/// The rule printed under the banner.
pub fn header_rule() -> String {
    "=".repeat(HEADER_RULE_WIDTH)
}

/// Whether colored output should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_without_escapes() {
        let theme = LauncherTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
        assert_eq!(theme.format_error("broken"), "✗ broken");
    }

    #[test]
    fn header_has_fifty_char_rule() {
        let theme = LauncherTheme::plain();
        let header = theme.format_header("EA Exam Practice Application v1.0.0");
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines[0], "EA Exam Practice Application v1.0.0");
        assert_eq!(lines[1], "=".repeat(50));
    }
}
