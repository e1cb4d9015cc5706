//! Error types and helpers for user-friendly error messages
//!
//! Every fatal condition ends the run with exit code 1. The variants here
//! carry enough context to print an actionable hint alongside the message.

use std::path::PathBuf;

use thiserror::Error;

use crate::utils::terminal::Console;

/// Fatal errors raised while orchestrating a build operation
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// A tool the operation cannot run without is not on PATH
    #[error("{tool} not found")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// A dispatched command exited with a non-zero status
    #[error("`{command}` exited with code {exit_code}")]
    ToolFailed { command: String, exit_code: i32 },

    /// No Cargo.toml was found above the executable or the working directory
    #[error("Could not locate the project root")]
    ProjectNotFound {
        searched: Vec<PathBuf>,
        hint: String,
    },
}

impl BootstrapError {
    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a failure for a command that exited non-zero
    pub fn tool_failed(command: impl Into<String>, exit_code: i32) -> Self {
        Self::ToolFailed {
            command: command.into(),
            exit_code,
        }
    }

    /// Create a project-not-found error listing where we looked
    pub fn project_not_found(searched: Vec<PathBuf>) -> Self {
        Self::ProjectNotFound {
            searched,
            hint: hints::project_root().to_string(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self, console: &Console) {
        match self {
            BootstrapError::MissingTool {
                required_for, hint, ..
            } => {
                console.error(&format!("ERROR: {}", self));
                console.detail(&format!("Required for: {}", required_for));
                console.hint(hint);
            }
            BootstrapError::ToolFailed { .. } => {
                console.error("Command failed!");
                console.detail(&self.to_string());
            }
            BootstrapError::ProjectNotFound { searched, hint } => {
                console.error(&format!("ERROR: {}", self));
                for dir in searched {
                    console.detail(&format!("searched from: {}", dir.display()));
                }
                console.hint(hint);
            }
        }
        eprintln!();
    }
}

/// Print any error that ended the run
pub fn report(console: &Console, err: &anyhow::Error) {
    match err.downcast_ref::<BootstrapError>() {
        Some(err) => err.display_with_hints(console),
        None => {
            console.error("Command failed!");
            console.detail(&format!("{:#}", err));
            eprintln!();
        }
    }
}

/// Remediation hints for missing tools and project problems
pub mod hints {
    /// Get hint for missing maturin
    pub fn maturin() -> &'static str {
        "Install: pip install maturin"
    }

    /// Get hint for missing mdbook
    pub fn mdbook() -> &'static str {
        "cargo install mdbook"
    }

    /// Get hint for a missing cargo toolchain
    pub fn cargo() -> &'static str {
        "Install Rust from https://rustup.rs/ and ensure cargo is in your PATH"
    }

    /// Get hint for a missing project root
    pub fn project_root() -> &'static str {
        "Run bootstrap from inside the packager-rs checkout, or build it\n\
         into that checkout's target/ directory so it can find Cargo.toml."
    }
}
