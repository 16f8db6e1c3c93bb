//! ea-prep - Launcher for the EA Exam Practice web application.
//!
//! Checks that Node.js and npm are available, installs the project's
//! dependencies when needed, and runs the development server in the
//! foreground until it exits or the user presses Ctrl+C.
//!
//! # Modules
//!
//! - [`cli`] - Command-line parsing and command implementations
//! - [`config`] - Optional `ea-prep.yml` overrides
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Tool probing and dependency installation
//! - [`runner`] - Foreground supervision of the development server
//! - [`shell`] - External process execution
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use ea_prep::cli::{CommandDispatcher, LauncherCommand};
//! use ea_prep::shell::MockRunner;
//! use ea_prep::ui::MockUI;
//! use tempfile::TempDir;
//!
//! // No package.json here, so nothing is probed or run.
//! let temp = TempDir::new().unwrap();
//! let runner = MockRunner::new();
//! let mut ui = MockUI::new();
//!
//! let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), &runner);
//! let result = dispatcher.dispatch_command(&LauncherCommand::Start, &mut ui).unwrap();
//!
//! assert_eq!(result.exit_code, 1);
//! assert!(ui.has_error_containing("package.json not found"));
//! assert!(runner.invocations().is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{LauncherError, Result};
