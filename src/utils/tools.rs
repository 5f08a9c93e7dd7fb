//! Render tool detection
//!
//! Locates the external renderer before any subprocess is spawned so a
//! missing installation surfaces as one actionable error instead of a
//! spawn failure.

use std::path::PathBuf;
use std::process::Command;

use which::which;

use crate::error::{hints, ScaffoldError};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,
    /// Path to the tool executable
    pub path: PathBuf,
    /// Tool version string (if available)
    pub version: Option<String>,
}

/// Check if a tool exists and return its information
pub fn check_tool(tool_name: &str) -> Option<ToolInfo> {
    match which(tool_name) {
        Ok(path) => {
            let version = get_tool_version(tool_name);
            Some(ToolInfo {
                name: tool_name.to_string(),
                path,
                version,
            })
        }
        Err(_) => None,
    }
}

/// Get tool version by running `tool --version`
fn get_tool_version(tool_name: &str) -> Option<String> {
    if let Ok(output) = Command::new(tool_name).arg("--version").output() {
        if output.status.success() {
            let version = String::from_utf8_lossy(&output.stdout);
            return Some(version.lines().next().unwrap_or("").trim().to_string());
        }
    }

    None
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(tool_name: &str, required_for: &str) -> Result<ToolInfo, ScaffoldError> {
    match check_tool(tool_name) {
        Some(info) => Ok(info),
        None => Err(ScaffoldError::missing_tool(
            tool_name,
            required_for,
            get_tool_hint(tool_name),
        )),
    }
}

/// Get installation hint for a tool
fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "cookiecutter" => hints::cookiecutter(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_tool_found() {
        // sh exists on every unix development system
        let info = check_tool("sh").unwrap();
        assert_eq!(info.name, "sh");
        assert!(info.path.ends_with("sh"));
    }

    #[test]
    fn test_check_tool_missing() {
        assert!(check_tool("definitely-not-a-real-program").is_none());
    }

    #[test]
    fn test_require_tool_missing_carries_hint() {
        let err = require_tool("cookiecutter-but-missing", "rendering").unwrap_err();
        match err {
            ScaffoldError::MissingTool { required_for, hint, .. } => {
                assert_eq!(required_for, "rendering");
                assert!(!hint.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
