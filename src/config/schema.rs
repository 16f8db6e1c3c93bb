//! Configuration schema for the launcher.
//!
//! Every field defaults to what the EA Exam Practice project expects, so
//! the config file is optional and may override any subset.

use serde::{Deserialize, Serialize};

/// Root configuration structure for `ea-prep.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Project descriptor that must exist in the project root.
    pub manifest: String,

    /// Directory whose presence means dependencies are already installed.
    pub dependency_dir: String,

    /// Executables probed before installing or starting.
    pub required_tools: Vec<String>,

    /// Argument passed to each required tool when probing.
    pub version_flag: String,

    /// Dependency install command.
    pub install_command: Vec<String>,

    /// Development server command.
    pub dev_command: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            manifest: "package.json".to_string(),
            dependency_dir: "node_modules".to_string(),
            required_tools: vec!["node".to_string(), "npm".to_string()],
            version_flag: "--version".to_string(),
            install_command: vec!["npm".to_string(), "install".to_string()],
            dev_command: vec!["npm".to_string(), "run".to_string(), "dev".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_node_project_layout() {
        let config = LauncherConfig::default();
        assert_eq!(config.manifest, "package.json");
        assert_eq!(config.dependency_dir, "node_modules");
        assert_eq!(config.required_tools, vec!["node", "npm"]);
        assert_eq!(config.version_flag, "--version");
        assert_eq!(config.install_command, vec!["npm", "install"]);
        assert_eq!(config.dev_command, vec!["npm", "run", "dev"]);
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let config: LauncherConfig = serde_yaml::from_str("dev_command: [npm, start]").unwrap();
        assert_eq!(config.dev_command, vec!["npm", "start"]);
        assert_eq!(config.install_command, vec!["npm", "install"]);
        assert_eq!(config.manifest, "package.json");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<LauncherConfig, _> = serde_yaml::from_str("manifest_file: foo.json");
        assert!(result.is_err());
    }
}
