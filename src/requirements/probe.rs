//! Environment probe for required external tools.
//!
//! Each tool is run with a version flag and its output captured. A tool
//! that is not installed and a tool that errors on the version check are
//! both reported as missing.
//!
//! # Example
//!
//! ```
//! use ea_prep::requirements::probe::probe_tools;
//! use ea_prep::shell::MockRunner;
//!
//! let runner = MockRunner::new().with_tool("node", "v20.11.0\n");
//! let tools = vec!["node".to_string(), "npm".to_string()];
//!
//! let report = probe_tools(&runner, &tools, "--version");
//! assert_eq!(report.missing, vec!["npm"]);
//! assert_eq!(report.found[0].version.as_deref(), Some("20.11.0"));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::shell::ProcessRunner;
use crate::ui::UserInterface;

/// Regex for pulling a dotted version number out of `--version` output.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\.\d+(?:\.\d+)?(?:[-+][0-9A-Za-z.\-]+)?").expect("VERSION_REGEX must compile")
});

/// Shown after the list of missing tools.
pub const INSTALL_HINT: &str = "Please install Node.js and npm to run this application.";

/// A tool that responded to the version check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersion {
    /// Tool name as probed.
    pub name: String,
    /// Version extracted from the tool's output, if recognizable.
    pub version: Option<String>,
}

/// Result of probing all required tools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    /// Tools that are available, in probe order.
    pub found: Vec<ToolVersion>,
    /// Tools that are missing, in probe order.
    pub missing: Vec<String>,
}

impl ProbeReport {
    /// Whether every required tool is available.
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Probe each tool once, in order.
///
/// Duplicate names are probed once.
pub fn probe_tools(runner: &dyn ProcessRunner, tools: &[String], version_flag: &str) -> ProbeReport {
    let mut report = ProbeReport::default();

    for tool in tools {
        let seen = report.missing.contains(tool) || report.found.iter().any(|f| &f.name == tool);
        if seen {
            continue;
        }

        match runner.probe(tool, version_flag) {
            Some(output) => {
                let version = extract_version(&output);
                tracing::debug!("Found {} (version {:?})", tool, version);
                report.found.push(ToolVersion {
                    name: tool.clone(),
                    version,
                });
            }
            None => {
                tracing::debug!("{} is missing", tool);
                report.missing.push(tool.clone());
            }
        }
    }

    report
}

/// Extract the first version number from tool output.
///
/// `v18.19.0` yields `18.19.0`; output without a version yields `None`.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .find(output)
        .map(|m| m.as_str().to_string())
}

/// Probe the required tools and report the outcome to the user.
///
/// Returns `true` if every tool is available. Otherwise the user has been
/// told which tools are missing and the caller must stop.
pub fn check_requirements(
    runner: &dyn ProcessRunner,
    tools: &[String],
    version_flag: &str,
    ui: &mut dyn UserInterface,
) -> bool {
    let mut spinner = ui.start_spinner("Checking requirements...");
    let report = probe_tools(runner, tools, version_flag);

    if report.is_satisfied() {
        spinner.finish_success(&format!("Requirements satisfied ({})", describe_found(&report)));
        return true;
    }

    spinner.finish_error("Requirements check failed");
    ui.error(&format!(
        "Missing required dependencies: {}",
        report.missing.join(", ")
    ));
    ui.message(INSTALL_HINT);
    false
}

fn describe_found(report: &ProbeReport) -> String {
    report
        .found
        .iter()
        .map(|tool| match &tool.version {
            Some(version) => format!("{} {}", tool.name, version),
            None => tool.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::{MockUI, SpinnerStatus};

    fn tools(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_tools_present() {
        let runner = MockRunner::new()
            .with_tool("node", "v20.11.0")
            .with_tool("npm", "10.2.4");
        let report = probe_tools(&runner, &tools(&["node", "npm"]), "--version");

        assert!(report.is_satisfied());
        assert_eq!(report.found.len(), 2);
        assert_eq!(report.found[1].version.as_deref(), Some("10.2.4"));
    }

    #[test]
    fn missing_tools_are_listed_in_order() {
        let runner = MockRunner::new();
        let report = probe_tools(&runner, &tools(&["node", "npm"]), "--version");
        assert_eq!(report.missing, vec!["node", "npm"]);
    }

    #[test]
    fn every_tool_is_probed_even_after_a_miss() {
        let runner = MockRunner::new().with_tool("npm", "10.2.4");
        let report = probe_tools(&runner, &tools(&["node", "npm"]), "--version");
        assert_eq!(report.missing, vec!["node"]);
        assert_eq!(runner.probed_tools(), vec!["node", "npm"]);
    }

    #[test]
    fn duplicate_tools_probed_once() {
        let runner = MockRunner::new().with_tool("node", "v20.0.0");
        let report = probe_tools(&runner, &tools(&["node", "node"]), "--version");
        assert_eq!(report.found.len(), 1);
        assert_eq!(runner.probed_tools(), vec!["node"]);
    }

    #[test]
    fn extract_version_strips_prefix() {
        assert_eq!(extract_version("v18.19.0\n").as_deref(), Some("18.19.0"));
        assert_eq!(extract_version("10.2.4").as_deref(), Some("10.2.4"));
        assert_eq!(
            extract_version("v22.0.0-nightly2024").as_deref(),
            Some("22.0.0-nightly2024")
        );
        assert_eq!(extract_version("no version here"), None);
    }

    #[test]
    fn unrecognized_version_output_still_counts_as_found() {
        let runner = MockRunner::new().with_tool("node", "custom build");
        let report = probe_tools(&runner, &tools(&["node"]), "--version");
        assert!(report.is_satisfied());
        assert_eq!(report.found[0].version, None);
    }

    #[test]
    fn check_requirements_reports_missing_tools() {
        let runner = MockRunner::new().with_tool("node", "v20.0.0");
        let mut ui = MockUI::new();

        let ok = check_requirements(&runner, &tools(&["node", "npm"]), "--version", &mut ui);

        assert!(!ok);
        assert_eq!(ui.errors(), ["Missing required dependencies: npm"]);
        assert!(ui.has_message_containing("Please install Node.js and npm"));
        assert_eq!(ui.spinner_results()[0].0, SpinnerStatus::Error);
    }

    #[test]
    fn check_requirements_success_names_versions() {
        let runner = MockRunner::new()
            .with_tool("node", "v20.11.0")
            .with_tool("npm", "10.2.4");
        let mut ui = MockUI::new();

        assert!(check_requirements(
            &runner,
            &tools(&["node", "npm"]),
            "--version",
            &mut ui
        ));
        assert!(ui.errors().is_empty());
        assert_eq!(
            ui.spinner_results()[0].1,
            "Requirements satisfied (node 20.11.0, npm 10.2.4)"
        );
    }
}
