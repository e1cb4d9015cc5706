//! Clean command implementation

use super::{Discovery, Plan, ReportContext, Step};
use crate::exec::subprocess::CommandSpec;

/// `cargo clean`, untimed
pub fn plan() -> Plan {
    Plan::new("CLEAN")
        .with_step(Step::required(CommandSpec::new("cargo", ["clean"])))
        .untimed()
}

pub fn report(ctx: &ReportContext<'_>) -> Discovery {
    ctx.console.success(&ctx.with_elapsed("Done!"));
    ctx.console.blank();
    Discovery::NotAttempted
}
