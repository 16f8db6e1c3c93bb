//! Required tools and project dependencies.
//!
//! # Modules
//!
//! - [`probe`] - Checks that the required executables respond to a version flag
//! - [`installer`] - Runs the package manager's install command

pub mod installer;
pub mod probe;

pub use installer::{dependencies_present, install_dependencies};
pub use probe::{check_requirements, extract_version, probe_tools, ProbeReport, ToolVersion};
