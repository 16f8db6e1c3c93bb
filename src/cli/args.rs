//! CLI argument definitions.
//!
//! The launcher takes a single positional command token. Tokens are not
//! validated by clap: an unrecognized token still has to pass the project
//! and requirement checks before it is reported, so it is parsed into a
//! [`LauncherCommand`] after argument parsing.

use clap::Parser;

/// Launcher for the EA Exam Practice web application.
#[derive(Debug, Parser)]
#[command(name = "ea-prep")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Command to run: start (default), install, or help
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// The requested command, defaulting to `start`.
    pub fn launcher_command(&self) -> LauncherCommand {
        LauncherCommand::from_token(self.command.as_deref())
    }
}

/// A command token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherCommand {
    /// Install dependencies if needed, then run the development server.
    Start,
    /// Install dependencies only.
    Install,
    /// Print usage text.
    Help,
    /// Anything else, kept verbatim for the error message.
    Unknown(String),
}

impl LauncherCommand {
    /// Parse a token. A missing token means `start`; matching is exact.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None | Some("start") => Self::Start,
            Some("install") => Self::Install,
            Some("help") => Self::Help,
            Some(other) => Self::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_token_means_start() {
        let cli = Cli::parse_from(["ea-prep"]);
        assert_eq!(cli.launcher_command(), LauncherCommand::Start);
    }

    #[test]
    fn known_tokens_parse() {
        assert_eq!(LauncherCommand::from_token(Some("start")), LauncherCommand::Start);
        assert_eq!(
            LauncherCommand::from_token(Some("install")),
            LauncherCommand::Install
        );
        assert_eq!(LauncherCommand::from_token(Some("help")), LauncherCommand::Help);
    }

    #[test]
    fn help_token_is_not_swallowed_by_clap() {
        let cli = Cli::parse_from(["ea-prep", "help"]);
        assert_eq!(cli.launcher_command(), LauncherCommand::Help);
    }

    #[test]
    fn unknown_token_is_preserved() {
        let cli = Cli::parse_from(["ea-prep", "bogus"]);
        assert_eq!(
            cli.launcher_command(),
            LauncherCommand::Unknown("bogus".to_string())
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            LauncherCommand::from_token(Some("Start")),
            LauncherCommand::Unknown("Start".to_string())
        );
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let cli = Cli::parse_from(["ea-prep", "install", "now", "please"]);
        assert_eq!(cli.launcher_command(), LauncherCommand::Install);
        assert_eq!(cli.extra, vec!["now", "please"]);
    }
}
