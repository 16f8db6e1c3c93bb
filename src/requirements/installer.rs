//! Dependency installation.
//!
//! Runs the package manager's install command with its output visible to
//! the user. Success is whatever the package manager's exit status says.

use std::path::Path;

use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

/// Run the install command in the project root.
///
/// Returns `true` if it exited zero. On failure the user has been shown the
/// reason and nothing is retried.
pub fn install_dependencies(
    runner: &dyn ProcessRunner,
    install_command: &[String],
    project_root: &Path,
    ui: &mut dyn UserInterface,
) -> bool {
    ui.message("Installing dependencies...");

    let failure = match runner.run_to_completion(install_command, project_root) {
        Ok(result) => match result.error_for(install_command) {
            None => {
                tracing::debug!("Install finished in {:?}", result.duration);
                ui.success("Dependencies installed successfully!");
                return true;
            }
            Some(err) => err,
        },
        Err(err) => err,
    };

    tracing::warn!("Dependency install failed: {}", failure);
    ui.error(&format!("Failed to install dependencies: {}", failure));
    false
}

/// Whether the dependency directory is already present.
pub fn dependencies_present(project_root: &Path, dependency_dir: &str) -> bool {
    project_root.join(dependency_dir).exists()
}
