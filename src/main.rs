//! ea-prep CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ea_prep::cli::{Cli, CommandDispatcher, CommandResult};
use ea_prep::shell::{is_ci, SystemRunner};
use ea_prep::ui::{create_ui, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG`, defaulting to INFO. Logs go to stderr
/// so they never mix into the help text or the server's own output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ea_prep=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("ea-prep starting with args: {:?}", cli);

    let mut ui = create_ui(!is_ci());

    match run(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {:#}", e));
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> ea_prep::Result<CommandResult> {
    let project_root =
        std::env::current_dir().context("Failed to determine current directory")?;

    let runner = SystemRunner::new();
    CommandDispatcher::new(project_root, &runner).dispatch(cli, ui)
}
