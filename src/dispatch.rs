//! Command dispatcher
//!
//! Runs an operation's [`Plan`] strictly in order:
//!
//! ```text
//! Idle --(preconditions ok)--> Running --(all steps exit 0)--> Succeeded
//!   |                             |
//!   +--(required tool missing)----+--(step exits non-zero)---> Failed
//! ```
//!
//! The first failing required step ends the operation; later steps never
//! start and completed steps are left as they are. Help never leaves Idle.

use anyhow::Result;

use crate::commands::{help, Discovery, OptionSet, Operation, Plan, ReportContext, Step};
use crate::error::BootstrapError;
use crate::exec::subprocess::{CommandSpec, ProcessRunner};
use crate::utils::paths::ProjectLayout;
use crate::utils::terminal::Console;
use crate::utils::timing::{format_elapsed, Stopwatch};
use crate::utils::tools::{require_tool, tool_hint, ToolProbe, ToolRequirement};

/// Lifecycle of one dispatched operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Outcome of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub operation: Operation,
    /// Command lines that were actually started, in order
    pub executed: Vec<String>,
    /// Programs of optional steps that were skipped
    pub skipped: Vec<String>,
    pub elapsed_ms: Option<u64>,
    pub discovery: Discovery,
}

/// Drives plans through a [`ProcessRunner`], gated by a [`ToolProbe`]
pub struct Dispatcher<'a, R, P> {
    runner: R,
    probe: P,
    console: Console,
    layout: &'a ProjectLayout,
    phase: Phase,
}

impl<'a, R, P> Dispatcher<'a, R, P>
where
    R: ProcessRunner,
    P: ToolProbe,
{
    pub fn new(runner: R, probe: P, console: Console, layout: &'a ProjectLayout) -> Self {
        Self {
            runner,
            probe,
            console,
            layout,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run `operation` to completion
    ///
    /// Returns an error as soon as a required tool is missing or a required
    /// step exits non-zero; the dispatcher is then in [`Phase::Failed`].
    pub fn dispatch(&mut self, operation: Operation, options: OptionSet) -> Result<Summary> {
        let Some(plan) = operation.plan(self.layout, options) else {
            help::show();
            return Ok(Summary {
                operation,
                executed: Vec::new(),
                skipped: Vec::new(),
                elapsed_ms: None,
                discovery: Discovery::NotAttempted,
            });
        };

        self.console.debug(&format!(
            "{:?} {:?} in {}: {:?}",
            operation,
            options,
            self.layout.root.display(),
            plan.command_lines()
        ));
        self.console.header(&plan.title);

        for pre in &plan.preconditions {
            if let Err(err) = require_tool(&self.probe, pre.tool, pre.required_for) {
                return self.fail(err.into());
            }
        }

        self.transition(Phase::Running);
        let stopwatch = Stopwatch::start();
        let (executed, skipped) = self.run_steps(&plan)?;
        let elapsed_ms = plan.timed.then(|| stopwatch.elapsed_ms());
        self.transition(Phase::Succeeded);

        let ctx = ReportContext {
            console: &self.console,
            layout: self.layout,
            options,
            elapsed: elapsed_ms.map(format_elapsed),
            skipped: &skipped,
        };
        let discovery = operation.report(&ctx);

        Ok(Summary {
            operation,
            executed,
            skipped,
            elapsed_ms,
            discovery,
        })
    }

    fn run_steps(&mut self, plan: &Plan) -> Result<(Vec<String>, Vec<String>)> {
        let mut executed = Vec::new();
        let mut skipped = Vec::new();

        for Step {
            command,
            requirement,
        } in &plan.steps
        {
            match requirement {
                ToolRequirement::Required => {
                    executed.push(command.to_string());
                    self.run_checked(command)?;
                }
                ToolRequirement::Optional => {
                    if !self.probe.tool_available(&command.program) {
                        self.console.warning(&format!(
                            "{} not found, skipping ({})",
                            command.program,
                            tool_hint(&command.program)
                        ));
                        skipped.push(command.program.clone());
                        continue;
                    }
                    executed.push(command.to_string());
                    self.run_best_effort(command);
                }
            }
        }

        Ok((executed, skipped))
    }

    /// Run a step whose failure ends the operation
    fn run_checked(&mut self, command: &CommandSpec) -> Result<()> {
        self.console.step(&command.to_string());
        let code = match self.runner.run(command) {
            Ok(code) => code,
            Err(err) => return self.fail(err),
        };
        self.console.debug(&format!("{} -> exit {}", command, code));

        if code != 0 {
            return self.fail(BootstrapError::tool_failed(command.to_string(), code).into());
        }
        Ok(())
    }

    /// Run a step whose outcome is only reported
    fn run_best_effort(&mut self, command: &CommandSpec) {
        self.console.step(&command.to_string());
        match self.runner.run(command) {
            Ok(0) => {}
            Ok(code) => self
                .console
                .warning(&format!("{} exited with code {}, continuing", command, code)),
            Err(err) => self
                .console
                .warning(&format!("{} could not run ({:#}), continuing", command, err)),
        }
    }

    fn fail<T>(&mut self, err: anyhow::Error) -> Result<T> {
        self.transition(Phase::Failed);
        Err(err)
    }

    fn transition(&mut self, next: Phase) {
        self.console.debug(&format!("phase {:?} -> {:?}", self.phase, next));
        self.phase = next;
    }
}
