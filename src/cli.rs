//! CLI argument parsing using clap derive macros

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::commands::{help, OptionSet, Operation};
use crate::dispatch::Dispatcher;
use crate::error;
use crate::exec::subprocess::SystemRunner;
use crate::utils::paths::{find_project_root, ProjectLayout};
use crate::utils::terminal::{terminal_supports_color, Console};
use crate::utils::tools::PathProbe;

/// Cross-platform build front-end for packager-rs
///
/// Dispatches to cargo and maturin, reporting timing and artifact locations.
#[derive(Parser, Debug)]
#[command(name = "bootstrap")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Operation to run
    #[arg(value_enum, default_value_t = Operation::Help)]
    pub operation: Operation,

    /// Build in debug mode (default: release)
    #[arg(short, long)]
    pub debug: bool,

    /// For python: install in current venv (default: build only)
    #[arg(short, long)]
    pub install: bool,

    /// Show help, whatever the operation
    #[arg(short, long)]
    pub help: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Operation after applying `--help`
    pub fn resolved_operation(&self) -> Operation {
        if self.help {
            Operation::Help
        } else {
            self.operation
        }
    }

    pub fn options(&self) -> OptionSet {
        OptionSet {
            debug: self.debug,
            install: self.install,
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> ExitCode {
        let console = Console::new(!self.no_color && terminal_supports_color(), self.verbose);

        let operation = self.resolved_operation();
        if operation == Operation::Help {
            help::show();
            return ExitCode::SUCCESS;
        }

        match self.run(operation, &console) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error::report(&console, &err);
                ExitCode::FAILURE
            }
        }
    }

    fn run(&self, operation: Operation, console: &Console) -> Result<()> {
        let layout = ProjectLayout::new(find_project_root()?);
        console.debug(&format!("project root: {}", layout.root.display()));

        let runner = SystemRunner::new(layout.root.clone());
        let mut dispatcher = Dispatcher::new(runner, PathProbe, *console, &layout);
        let summary = dispatcher.dispatch(operation, self.options())?;

        console.debug(&format!(
            "{:?} finished ({:?}): ran {:?}, skipped {:?}, {} ms",
            summary.operation,
            dispatcher.phase(),
            summary.executed,
            summary.skipped,
            summary.elapsed_ms.unwrap_or_default()
        ));
        if let Some(path) = summary.discovery.path() {
            console.debug(&format!("reported artifact: {}", path.display()));
        }
        Ok(())
    }
}
