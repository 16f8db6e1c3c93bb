//! Launcher configuration.
//!
//! - Schema and defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use ea_prep::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("ea-prep.yml"), "dev_command: [npm, start]").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.dev_command, vec!["npm", "start"]);
//! assert_eq!(config.manifest, "package.json");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{config_path, load_config, parse_config, CONFIG_FILE_NAME};
pub use schema::LauncherConfig;
