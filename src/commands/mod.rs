//! Command implementations
//!
//! Each operation module turns an [`OptionSet`] into a [`Plan`] and renders
//! the final report once the plan has run. Plans are plain data, so what an
//! operation would run can be checked without spawning anything.

pub mod bench;
pub mod build;
pub mod clean;
pub mod doc;
pub mod help;
pub mod python;

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::exec::subprocess::CommandSpec;
use crate::utils::artifacts::ArtifactRef;
use crate::utils::paths::{Profile, ProjectLayout};
use crate::utils::terminal::Console;
use crate::utils::tools::ToolRequirement;

/// The build-lifecycle action selected for this invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Build the Rust CLI binary
    Build,
    /// Build the Python module with maturin
    #[value(name = "python")]
    BuildBinding,
    /// Run unit then integration tests
    Test,
    /// Run criterion benchmarks
    Bench,
    /// Build rustdoc and the mdbook book
    Docs,
    /// Remove build artifacts
    Clean,
    /// Show usage
    Help,
}

impl Operation {
    /// The plan for this operation, or `None` for help which runs nothing
    pub fn plan(self, layout: &ProjectLayout, options: OptionSet) -> Option<Plan> {
        match self {
            Operation::Build => Some(build::plan(options)),
            Operation::BuildBinding => Some(python::plan(options)),
            Operation::Test => Some(test::plan(layout)),
            Operation::Bench => Some(bench::plan(layout)),
            Operation::Docs => Some(doc::plan(layout)),
            Operation::Clean => Some(clean::plan()),
            Operation::Help => None,
        }
    }

    /// Print the closing report after every step succeeded
    pub fn report(self, ctx: &ReportContext<'_>) -> Discovery {
        match self {
            Operation::Build => build::report(ctx),
            Operation::BuildBinding => python::report(ctx),
            Operation::Test => test::report(ctx),
            Operation::Bench => bench::report(ctx),
            Operation::Docs => doc::report(ctx),
            Operation::Clean => clean::report(ctx),
            Operation::Help => Discovery::NotAttempted,
        }
    }
}

/// Flags that modify an operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionSet {
    /// Debug instead of release
    pub debug: bool,
    /// Install into the active virtualenv instead of building a wheel.
    /// Only meaningful for [`Operation::BuildBinding`].
    pub install: bool,
}

impl OptionSet {
    pub fn profile(&self) -> Profile {
        Profile::from_debug_flag(self.debug)
    }
}

/// A tool that must be on PATH before any step of a plan runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Precondition {
    pub tool: &'static str,
    pub required_for: &'static str,
}

/// One command in a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub command: CommandSpec,
    /// `Required` steps always run and a non-zero exit ends the operation.
    /// `Optional` steps run only if their program is on PATH, and their
    /// exit code is reported but never fatal.
    pub requirement: ToolRequirement,
}

impl Step {
    pub fn required(command: CommandSpec) -> Self {
        Self {
            command,
            requirement: ToolRequirement::Required,
        }
    }

    pub fn optional(command: CommandSpec) -> Self {
        Self {
            command,
            requirement: ToolRequirement::Optional,
        }
    }
}

/// The ordered commands realizing one operation with one option set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Section header title
    pub title: String,
    pub preconditions: Vec<Precondition>,
    pub steps: Vec<Step>,
    /// Whether the success line reports elapsed time
    pub timed: bool,
}

impl Plan {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            preconditions: Vec::new(),
            steps: Vec::new(),
            timed: true,
        }
    }

    pub fn require(mut self, tool: &'static str, required_for: &'static str) -> Self {
        self.preconditions.push(Precondition { tool, required_for });
        self
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn untimed(mut self) -> Self {
        self.timed = false;
        self
    }

    /// Command lines of all steps, in order
    pub fn command_lines(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.command.to_string()).collect()
    }
}

/// What the closing report found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// The operation has nothing to look for
    NotAttempted,
    /// A location computed from the layout, not checked on disk
    Computed(PathBuf),
    /// A scan ran and found this artifact
    Found(ArtifactRef),
    /// A scan ran and found nothing
    NotFound,
}

impl Discovery {
    /// Location worth reporting, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Discovery::Computed(path) => Some(path.as_path()),
            Discovery::Found(artifact) => Some(artifact.path.as_path()),
            Discovery::NotAttempted | Discovery::NotFound => None,
        }
    }
}

/// Everything a closing report may need
#[derive(Debug)]
pub struct ReportContext<'a> {
    pub console: &'a Console,
    pub layout: &'a ProjectLayout,
    pub options: OptionSet,
    /// Formatted elapsed time, for timed plans
    pub elapsed: Option<String>,
    /// Programs of optional steps that were skipped
    pub skipped: &'a [String],
}

impl ReportContext<'_> {
    /// `"Done! (1.2s)"`, or just `"Done!"` when untimed
    pub fn with_elapsed(&self, message: &str) -> String {
        match &self.elapsed {
            Some(elapsed) => format!("{} ({})", message, elapsed),
            None => message.to_string(),
        }
    }

    pub fn was_skipped(&self, program: &str) -> bool {
        self.skipped.iter().any(|s| s == program)
    }
}
