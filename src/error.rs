//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the error type used throughout
//! the launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Most failures (missing manifest, missing tools, failed installs) are
//!   reported to the user where they are detected and never become errors
//! - `LauncherError` carries the detail text shown in those reports
//! - Use `anyhow::Error` (via `LauncherError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Failed to parse the launcher config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// External command exited with a non-zero status.
    #[error("Command '{command}' returned non-zero exit status {}", display_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// External command could not be started.
    #[error("Could not run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A command line has no program to run.
    #[error("Command line is empty")]
    EmptyCommand,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = LauncherError::ConfigParseError {
            path: PathBuf::from("/project/ea-prep.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/project/ea-prep.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = LauncherError::CommandFailed {
            command: "npm install".into(),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "Command 'npm install' returned non-zero exit status 1"
        );
    }

    #[test]
    fn command_failed_without_code_mentions_signal() {
        let err = LauncherError::CommandFailed {
            command: "npm run dev".into(),
            code: None,
        };
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn spawn_failed_includes_io_detail() {
        let err = LauncherError::SpawnFailed {
            command: "npm install".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm install"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn empty_command_displays_message() {
        assert_eq!(LauncherError::EmptyCommand.to_string(), "Command line is empty");
    }

    #[test]
    fn anyhow_context_survives_conversion() {
        use anyhow::Context;

        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ));
        let err: LauncherError = result
            .context("Failed to determine current directory")
            .unwrap_err()
            .into();

        assert!(matches!(err, LauncherError::Other(_)));
        assert_eq!(
            format!("{:#}", err),
            "Failed to determine current directory: No such file or directory"
        );
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LauncherError = io_err.into();
        assert!(matches!(err, LauncherError::Io(_)));
    }
}
