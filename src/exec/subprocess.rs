//! Subprocess execution with inherited standard streams
//!
//! Every external tool invocation goes through a [`ProcessRunner`]. The
//! child shares the parent's stdin, stdout and stderr so its output shows
//! up live and untouched.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::error::BootstrapError;
use crate::utils::tools::tool_hint;

/// One external command: program, arguments and an optional subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory relative to the project root, if not the root
    pub dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            dir: None,
        }
    }

    /// Run the command from `dir` under the project root
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Working directory given the project root
    pub fn working_dir(&self, root: &Path) -> PathBuf {
        match &self.dir {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Executes a command to completion and reports its exit code
pub trait ProcessRunner {
    /// Block until the command exits and return its exit code
    ///
    /// A non-zero exit is not an error at this level; only failing to start
    /// or wait for the child is.
    fn run(&mut self, command: &CommandSpec) -> Result<i32>;
}

/// [`ProcessRunner`] that spawns real processes
#[derive(Debug, Clone)]
pub struct SystemRunner {
    root: PathBuf,
}

impl SystemRunner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<i32> {
        let cwd = command.working_dir(&self.root);

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        let status = match status {
            Ok(status) => status,
            Err(err) if err.kind() == ErrorKind::NotFound && cwd.is_dir() => {
                return Err(BootstrapError::missing_tool(
                    &command.program,
                    command.to_string(),
                    tool_hint(&command.program),
                )
                .into());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to execute {} in {}", command.program, cwd.display())
                });
            }
        };

        // Killed by a signal: no code, treat as a failure
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_args() {
        let spec = CommandSpec::new("cargo", ["test", "--test", "integration"]);
        assert_eq!(spec.to_string(), "cargo test --test integration");
        assert_eq!(CommandSpec::new("cargo", Vec::<String>::new()).to_string(), "cargo");
    }

    #[test]
    fn test_working_dir() {
        let root = Path::new("/work");
        assert_eq!(CommandSpec::new("cargo", ["clean"]).working_dir(root), root);
        assert_eq!(
            CommandSpec::new("mdbook", ["build"]).in_dir("docs").working_dir(root),
            root.join("docs")
        );
    }

    #[test]
    fn test_missing_program_is_missing_tool() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut runner = SystemRunner::new(temp_dir.path());
        let err = runner
            .run(&CommandSpec::new("definitely-not-a-real-tool-4f2a", ["x"]))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BootstrapError>(),
            Some(BootstrapError::MissingTool { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_codes_pass_through() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut runner = SystemRunner::new(temp_dir.path());
        assert_eq!(runner.run(&CommandSpec::new("sh", ["-c", "exit 0"])).unwrap(), 0);
        assert_eq!(runner.run(&CommandSpec::new("sh", ["-c", "exit 3"])).unwrap(), 3);
    }
}
