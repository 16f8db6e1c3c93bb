//! The `start` command (also the default).

use crate::error::Result;
use crate::requirements::{dependencies_present, install_dependencies};
use crate::runner::{start_application, RunOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, LaunchContext};

/// The `start` command implementation.
///
/// Installs dependencies when the dependency directory is missing, then
/// runs the development server in the foreground.
pub struct StartCommand<'a> {
    ctx: LaunchContext<'a>,
}

impl<'a> StartCommand<'a> {
    /// Create the start command.
    pub fn new(ctx: LaunchContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for StartCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let LaunchContext {
            project_root,
            config,
            runner,
        } = self.ctx;

        if !dependencies_present(project_root, &config.dependency_dir) {
            tracing::debug!("{} missing, installing first", config.dependency_dir);
            if !install_dependencies(runner, &config.install_command, project_root, ui) {
                return Ok(CommandResult::failure(1));
            }
        }

        // Server failures are reported but do not fail the launcher.
        match start_application(runner, &config.dev_command, project_root, ui) {
            RunOutcome::Failed(detail) => tracing::debug!("Server run failed: {}", detail),
            outcome => tracing::debug!("Server run ended: {:?}", outcome),
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;
    use crate::shell::{Invocation, MockRunner};
    use crate::ui::MockUI;

    #[test]
    fn install_precedes_server_launch() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = LauncherConfig::default();
        let runner = MockRunner::new();
        let ctx = LaunchContext {
            project_root: temp.path(),
            config: &config,
            runner: &runner,
        };
        let mut ui = MockUI::new();

        StartCommand::new(ctx).execute(&mut ui).unwrap();

        assert_eq!(
            runner.invocations(),
            vec![
                Invocation::Completion(config.install_command.clone()),
                Invocation::Foreground(config.dev_command.clone()),
            ]
        );
    }
}
