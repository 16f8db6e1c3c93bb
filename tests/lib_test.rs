//! Library integration tests.

use ea_prep::LauncherError;

#[test]
fn error_types_are_public() {
    let err = LauncherError::EmptyCommand;
    assert!(err.to_string().contains("empty"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> ea_prep::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use ea_prep::cli::{Cli, LauncherCommand};

    let cli = Cli::parse_from(["ea-prep", "install"]);
    assert_eq!(cli.launcher_command(), LauncherCommand::Install);
}

#[test]
fn dispatcher_runs_against_mock_runner() {
    use ea_prep::cli::{CommandDispatcher, LauncherCommand};
    use ea_prep::shell::{MockOutcome, MockRunner};
    use ea_prep::ui::MockUI;

    let temp = tempfile::TempDir::new().unwrap();
    std::fs::write(temp.path().join("package.json"), "{}").unwrap();
    std::fs::create_dir(temp.path().join("node_modules")).unwrap();

    let runner = MockRunner::new()
        .with_tool("node", "v20.11.0")
        .with_tool("npm", "10.2.4")
        .with_foreground_outcome(MockOutcome::Interrupted);
    let mut ui = MockUI::new();

    let result = CommandDispatcher::new(temp.path().to_path_buf(), &runner)
        .dispatch_command(&LauncherCommand::Start, &mut ui)
        .unwrap();

    assert!(result.success);
    assert_eq!(runner.foreground_runs().len(), 1);
    assert!(runner.completion_runs().is_empty());
    assert!(ui.has_message_containing("Application stopped by user."));
}
