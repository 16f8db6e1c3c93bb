//! Command-line interface for the launcher.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, LauncherCommand};
pub use commands::{Command, CommandDispatcher, CommandResult};
