//! Mock process runner for testing.
//!
//! `MockRunner` implements [`ProcessRunner`] without creating processes. It
//! records every invocation for later assertion and returns configured
//! outcomes.
//!
//! # Example
//!
//! ```
//! use ea_prep::shell::{MockOutcome, MockRunner, ProcessRunner};
//! use std::path::Path;
//!
//! let runner = MockRunner::new()
//!     .with_tool("node", "v20.11.0")
//!     .with_install_outcome(MockOutcome::Exit(0));
//!
//! assert!(runner.probe("node", "--version").is_some());
//! assert!(runner.probe("npm", "--version").is_none());
//!
//! let argv = vec!["npm".to_string(), "install".to_string()];
//! assert!(runner.run_to_completion(&argv, Path::new(".")).unwrap().success);
//! assert_eq!(runner.completion_runs(), vec![argv]);
//! assert_eq!(runner.invocations().len(), 3);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::{LauncherError, Result};

use super::command::{display_command, CommandResult, ForegroundResult, ProcessRunner};

/// Outcome a [`MockRunner`] reports for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOutcome {
    /// The command exits with this code.
    Exit(i32),
    /// The user interrupts the command.
    Interrupted,
    /// The command cannot be started.
    SpawnError,
}

/// A recorded call on the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `probe(tool, ..)`
    Probe(String),
    /// `run_to_completion(argv, ..)`
    Completion(Vec<String>),
    /// `run_foreground(argv, ..)`
    Foreground(Vec<String>),
}

/// Mock runner implementation for testing.
#[derive(Debug)]
pub struct MockRunner {
    tools: HashMap<String, String>,
    install_outcome: MockOutcome,
    foreground_outcome: MockOutcome,
    invocations: RefCell<Vec<Invocation>>,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self {
            tools: HashMap::new(),
            install_outcome: MockOutcome::Exit(0),
            foreground_outcome: MockOutcome::Exit(0),
            invocations: RefCell::new(Vec::new()),
        }
    }
}

impl MockRunner {
    /// Create a runner with no tools available and succeeding commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a tool available, reporting the given version output.
    pub fn with_tool(mut self, name: &str, version: &str) -> Self {
        self.tools.insert(name.to_string(), version.to_string());
        self
    }

    /// Set the outcome of `run_to_completion`.
    pub fn with_install_outcome(mut self, outcome: MockOutcome) -> Self {
        self.install_outcome = outcome;
        self
    }

    /// Set the outcome of `run_foreground`.
    pub fn with_foreground_outcome(mut self, outcome: MockOutcome) -> Self {
        self.foreground_outcome = outcome;
        self
    }

    /// All calls in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Tools that were probed, in order.
    pub fn probed_tools(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .filter_map(|i| match i {
                Invocation::Probe(tool) => Some(tool.clone()),
                _ => None,
            })
            .collect()
    }

    /// Commands passed to `run_to_completion`, in order.
    pub fn completion_runs(&self) -> Vec<Vec<String>> {
        self.invocations
            .borrow()
            .iter()
            .filter_map(|i| match i {
                Invocation::Completion(argv) => Some(argv.clone()),
                _ => None,
            })
            .collect()
    }

    /// Commands passed to `run_foreground`, in order.
    pub fn foreground_runs(&self) -> Vec<Vec<String>> {
        self.invocations
            .borrow()
            .iter()
            .filter_map(|i| match i {
                Invocation::Foreground(argv) => Some(argv.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether any command other than a probe was run.
    pub fn spawned_anything(&self) -> bool {
        !self.completion_runs().is_empty() || !self.foreground_runs().is_empty()
    }

    fn spawn_error(argv: &[String]) -> LauncherError {
        LauncherError::SpawnFailed {
            command: display_command(argv),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
        }
    }

    fn exit_result(code: i32) -> CommandResult {
        if code == 0 {
            CommandResult::success(String::new(), String::new(), Duration::ZERO)
        } else {
            CommandResult::failure(Some(code), String::new(), String::new(), Duration::ZERO)
        }
    }
}

impl ProcessRunner for MockRunner {
    fn probe(&self, tool: &str, _version_flag: &str) -> Option<String> {
        self.invocations
            .borrow_mut()
            .push(Invocation::Probe(tool.to_string()));
        self.tools.get(tool).cloned()
    }

    fn run_to_completion(&self, argv: &[String], _cwd: &Path) -> Result<CommandResult> {
        self.invocations
            .borrow_mut()
            .push(Invocation::Completion(argv.to_vec()));
        match self.install_outcome {
            MockOutcome::Exit(code) => Ok(Self::exit_result(code)),
            MockOutcome::Interrupted => Ok(CommandResult::failure(
                None,
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
            MockOutcome::SpawnError => Err(Self::spawn_error(argv)),
        }
    }

    fn run_foreground(&self, argv: &[String], _cwd: &Path) -> Result<ForegroundResult> {
        self.invocations
            .borrow_mut()
            .push(Invocation::Foreground(argv.to_vec()));
        match self.foreground_outcome {
            MockOutcome::Exit(code) => Ok(ForegroundResult::Completed(Self::exit_result(code))),
            MockOutcome::Interrupted => Ok(ForegroundResult::Interrupted),
            MockOutcome::SpawnError => Err(Self::spawn_error(argv)),
        }
    }
}
