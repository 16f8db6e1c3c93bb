//! The `install` command.

use crate::error::Result;
use crate::requirements::install_dependencies;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, LaunchContext};

/// The `install` command implementation.
pub struct InstallCommand<'a> {
    ctx: LaunchContext<'a>,
}

impl<'a> InstallCommand<'a> {
    /// Create the install command.
    pub fn new(ctx: LaunchContext<'a>) -> Self {
        Self { ctx }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installed = install_dependencies(
            self.ctx.runner,
            &self.ctx.config.install_command,
            self.ctx.project_root,
            ui,
        );

        if installed {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LauncherConfig;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;

    #[test]
    fn installs_even_when_modules_exist() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("node_modules")).unwrap();
        let config = LauncherConfig::default();
        let runner = MockRunner::new();
        let ctx = LaunchContext {
            project_root: temp.path(),
            config: &config,
            runner: &runner,
        };
        let mut ui = MockUI::new();

        let result = InstallCommand::new(ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(runner.completion_runs(), vec![config.install_command.clone()]);
    }
}
