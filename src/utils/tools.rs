//! Tool detection with graceful degradation
//!
//! Detection is a PATH lookup only; tools are never executed to find out
//! whether they exist.

use std::path::PathBuf;

use which::which;

use crate::error::{hints, BootstrapError};

/// Answers whether an external tool can be invoked
pub trait ToolProbe {
    /// Check if `name` resolves on PATH
    fn tool_available(&self, name: &str) -> bool;
}

/// Tool requirement level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolRequirement {
    /// The operation aborts before running anything if the tool is missing
    Required,
    /// The step using the tool is skipped with a warning if it is missing
    Optional,
}

/// [`ToolProbe`] backed by the real PATH
#[derive(Debug, Default, Clone, Copy)]
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn tool_available(&self, name: &str) -> bool {
        locate_tool(name).is_some()
    }
}

/// Resolve a tool to its full path
pub fn locate_tool(name: &str) -> Option<PathBuf> {
    which(name).ok()
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(
    probe: &dyn ToolProbe,
    tool_name: &str,
    required_for: &str,
) -> Result<(), BootstrapError> {
    if probe.tool_available(tool_name) {
        Ok(())
    } else {
        Err(BootstrapError::missing_tool(
            tool_name,
            required_for,
            tool_hint(tool_name),
        ))
    }
}

/// Get installation hint for a tool
pub fn tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "maturin" => hints::maturin(),
        "mdbook" => hints::mdbook(),
        "cargo" => hints::cargo(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}
