//! Configuration file discovery and loading.

use crate::config::schema::LauncherConfig;
use crate::error::{LauncherError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file in the project root.
pub const CONFIG_FILE_NAME: &str = "ea-prep.yml";

/// Path of the config file for the given project root.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load the launcher config for a project.
///
/// A missing config file yields [`LauncherConfig::default`].
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid or a command list is empty.
pub fn load_config(project_root: &Path) -> Result<LauncherConfig> {
    let path = config_path(project_root);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_root.display());
            return Ok(LauncherConfig::default());
        }
        Err(e) => return Err(LauncherError::Io(e)),
    };

    let config = parse_config(&content, &path)?;
    tracing::debug!("Loaded launcher config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Parse YAML content into a [`LauncherConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LauncherConfig> {
    // An empty file deserializes to null rather than an empty mapping.
    if content.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }

    let config: LauncherConfig =
        serde_yaml::from_str(content).map_err(|e| LauncherError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    for (name, command) in [
        ("install_command", &config.install_command),
        ("dev_command", &config.dev_command),
    ] {
        if command.is_empty() {
            return Err(LauncherError::ConfigParseError {
                path: source_path.to_path_buf(),
                message: format!("{} must name a program", name),
            });
        }
    }

    Ok(config)
}
