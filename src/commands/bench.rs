//! Benchmark command implementation

use super::{Discovery, Plan, ReportContext, Step};
use crate::exec::subprocess::CommandSpec;
use crate::utils::paths::ProjectLayout;

/// `cargo bench --bench <target>`
pub fn plan(layout: &ProjectLayout) -> Plan {
    Plan::new("BENCH").with_step(Step::required(CommandSpec::new(
        "cargo",
        ["bench", "--bench", layout.bench_target],
    )))
}

pub fn report(ctx: &ReportContext<'_>) -> Discovery {
    ctx.console.success(&ctx.with_elapsed("Benchmarks complete!"));
    ctx.console.info(&format!("Report: {}", ctx.layout.bench_report()));
    ctx.console.blank();
    Discovery::Computed(ctx.layout.root.join(ctx.layout.bench_report()))
}
