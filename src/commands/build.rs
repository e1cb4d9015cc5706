//! Build command implementation
//!
//! Compiles the `pkg` CLI with cargo and reports where the binary landed.

use super::{Discovery, OptionSet, Plan, ReportContext, Step};
use crate::exec::subprocess::CommandSpec;

/// `cargo build [--release]`
pub fn plan(options: OptionSet) -> Plan {
    let profile = options.profile();
    let command = if options.debug {
        CommandSpec::new("cargo", ["build"])
    } else {
        CommandSpec::new("cargo", ["build", "--release"])
    };

    Plan::new(format!("BUILD ({})", profile.as_str())).with_step(Step::required(command))
}

pub fn report(ctx: &ReportContext<'_>) -> Discovery {
    let binary = ctx.layout.binary_path(ctx.options.profile());

    ctx.console.success(&ctx.with_elapsed("Done!"));
    ctx.console.info(&format!("Binary: {}", binary.display()));
    ctx.console.blank();

    Discovery::Computed(binary)
}
