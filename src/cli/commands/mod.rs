//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which runs the shared
//! project checks (manifest, required tools) before routing to `install`
//! or `start`. `help` skips those checks entirely.

pub mod dispatcher;
pub mod help;
pub mod install;
pub mod start;

pub use dispatcher::{banner_title, Command, CommandDispatcher, CommandResult, LaunchContext};
pub use help::{HelpCommand, HELP_TEXT};
pub use install::InstallCommand;
pub use start::StartCommand;
