//! External command execution.
//!
//! Everything the launcher does to the outside world goes through the
//! [`ProcessRunner`] trait so command logic can be exercised against
//! [`MockRunner`](super::MockRunner) instead of real processes.

use crate::error::{LauncherError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use super::interrupt::InterruptGuard;

/// Result of running an external command to completion.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when inherited).
    pub stdout: String,

    /// Standard error (empty when inherited).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Build a result from a finished process status with inherited output.
    fn from_status(status: ExitStatus, duration: Duration) -> Self {
        if status.success() {
            Self::success(String::new(), String::new(), duration)
        } else {
            Self::failure(status.code(), String::new(), String::new(), duration)
        }
    }

    /// Error describing this result when it is a failure.
    pub fn error_for(&self, argv: &[String]) -> Option<LauncherError> {
        if self.success {
            None
        } else {
            Some(LauncherError::CommandFailed {
                command: display_command(argv),
                code: self.exit_code,
            })
        }
    }
}

/// How a foreground run ended.
#[derive(Debug, Clone)]
pub enum ForegroundResult {
    /// The child exited on its own.
    Completed(CommandResult),

    /// The user interrupted the run (Ctrl+C).
    Interrupted,
}

/// Capability for touching external processes.
pub trait ProcessRunner {
    /// Run `tool version_flag` with output captured.
    ///
    /// Returns the tool's version output if it started and exited zero.
    /// A tool that cannot be found and a tool that errors are both `None`.
    fn probe(&self, tool: &str, version_flag: &str) -> Option<String>;

    /// Run a command with inherited stdio and wait for it.
    fn run_to_completion(&self, argv: &[String], cwd: &Path) -> Result<CommandResult>;

    /// Run a command in the foreground until it exits or the user interrupts it.
    fn run_foreground(&self, argv: &[String], cwd: &Path) -> Result<ForegroundResult>;
}

/// [`ProcessRunner`] backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn probe(&self, tool: &str, version_flag: &str) -> Option<String> {
        let argv = [tool.to_string(), version_flag.to_string()];
        let mut cmd = build_command(&argv).ok()?;
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Probe of '{}' failed to start: {}", tool, e);
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                "Probe of '{}' exited with {:?}",
                tool,
                output.status.code()
            );
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if stdout.trim().is_empty() {
            Some(String::from_utf8_lossy(&output.stderr).to_string())
        } else {
            Some(stdout)
        }
    }

    fn run_to_completion(&self, argv: &[String], cwd: &Path) -> Result<CommandResult> {
        let start = Instant::now();
        let mut cmd = build_command(argv)?;
        cmd.current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!("Running '{}' in {}", display_command(argv), cwd.display());

        let status = cmd.status().map_err(|e| LauncherError::SpawnFailed {
            command: display_command(argv),
            source: e,
        })?;

        Ok(CommandResult::from_status(status, start.elapsed()))
    }

    fn run_foreground(&self, argv: &[String], cwd: &Path) -> Result<ForegroundResult> {
        let start = Instant::now();
        let mut cmd = build_command(argv)?;
        cmd.current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!(
            "Starting foreground '{}' in {}",
            display_command(argv),
            cwd.display()
        );

        // Armed before the spawn so an early Ctrl+C cannot kill the launcher.
        let guard = InterruptGuard::install();

        let mut child = cmd.spawn().map_err(|e| LauncherError::SpawnFailed {
            command: display_command(argv),
            source: e,
        })?;

        let status = child.wait()?;
        let duration = start.elapsed();

        if guard.interrupted() || terminated_by_interrupt(&status) {
            tracing::debug!("Foreground run interrupted after {:?}", duration);
            return Ok(ForegroundResult::Interrupted);
        }

        Ok(ForegroundResult::Completed(CommandResult::from_status(
            status, duration,
        )))
    }
}

/// Render an argument vector the way a user would type it.
pub fn display_command(argv: &[String]) -> String {
    argv.join(" ")
}

/// Build a [`Command`] for an argument vector.
///
/// On Windows the command goes through `cmd /C` so `.cmd` shims such as
/// `npm.cmd` resolve.
fn build_command(argv: &[String]) -> Result<Command> {
    let (program, args) = argv.split_first().ok_or(LauncherError::EmptyCommand)?;

    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(program).args(args);
        Ok(cmd)
    } else {
        let mut cmd = Command::new(program);
        cmd.args(args);
        Ok(cmd)
    }
}

/// Whether the child itself died from the interactive interrupt.
#[cfg(unix)]
fn terminated_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(libc::SIGINT)
}

/// STATUS_CONTROL_C_EXIT
#[cfg(not(unix))]
fn terminated_by_interrupt(status: &ExitStatus) -> bool {
    status.code() == Some(0xC000013A_u32 as i32)
}
