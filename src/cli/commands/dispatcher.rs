//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`LaunchContext`] for what commands need from the project
//! - [`CommandDispatcher`] for the precondition checks and routing

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, LauncherCommand};
use crate::config::{load_config, LauncherConfig};
use crate::error::Result;
use crate::requirements::check_requirements;
use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

use super::help::HelpCommand;
use super::install::InstallCommand;
use super::start::StartCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Everything a project command needs, resolved once by the dispatcher.
#[derive(Clone, Copy)]
pub struct LaunchContext<'a> {
    /// Directory the launcher runs in.
    pub project_root: &'a Path,
    /// Effective launcher config.
    pub config: &'a LauncherConfig,
    /// How external commands are run.
    pub runner: &'a dyn ProcessRunner,
}

/// Banner printed at the start of every invocation.
pub fn banner_title() -> String {
    format!("EA Exam Practice Application v{}", env!("CARGO_PKG_VERSION"))
}

/// Dispatches the command token to its implementation.
pub struct CommandDispatcher<'a> {
    project_root: PathBuf,
    runner: &'a dyn ProcessRunner,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            project_root,
            runner,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute the command named on the command line.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !cli.extra.is_empty() {
            tracing::debug!("Ignoring extra arguments: {:?}", cli.extra);
        }
        self.dispatch_command(&cli.launcher_command(), ui)
    }

    /// Dispatch and execute a parsed command.
    ///
    /// Everything except `help` first requires the manifest in the project
    /// root and every required tool. Unknown tokens are only reported once
    /// those checks pass.
    pub fn dispatch_command(
        &self,
        command: &LauncherCommand,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ui.show_header(&banner_title());
        tracing::debug!("Dispatching {:?} in {}", command, self.project_root.display());

        if *command == LauncherCommand::Help {
            return HelpCommand::new().execute(ui);
        }

        let config = load_config(&self.project_root)?;

        if !self.project_root.join(&config.manifest).exists() {
            ui.error(&format!(
                "Error: {} not found. Please run this script from the project root directory.",
                config.manifest
            ));
            return Ok(CommandResult::failure(1));
        }

        if !check_requirements(
            self.runner,
            &config.required_tools,
            &config.version_flag,
            ui,
        ) {
            return Ok(CommandResult::failure(1));
        }

        let ctx = LaunchContext {
            project_root: &self.project_root,
            config: &config,
            runner: self.runner,
        };

        match command {
            LauncherCommand::Install => InstallCommand::new(ctx).execute(ui),
            LauncherCommand::Start => StartCommand::new(ctx).execute(ui),
            LauncherCommand::Help => HelpCommand::new().execute(ui),
            LauncherCommand::Unknown(token) => {
                ui.error(&format!("Unknown command: {}", token));
                ui.message("Use 'ea-prep help' for usage information.");
                Ok(CommandResult::failure(1))
            }
        }
    }
}
