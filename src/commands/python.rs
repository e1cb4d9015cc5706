//! Python module build via maturin
//!
//! `--install` builds straight into the active virtualenv with
//! `maturin develop`; otherwise a wheel is produced under `target/wheels`
//! and the newest one is reported with an install hint.

use super::{Discovery, OptionSet, Plan, ReportContext, Step};
use crate::exec::subprocess::CommandSpec;
use crate::utils::artifacts::latest_matching;

/// Snippet shown after an in-place install
const USAGE_SNIPPET: &str =
    r#"python -c "from packager import Package; print(Package('test', '1.0.0'))""#;

/// One of `maturin {develop|build} [--release]`
pub fn plan(options: OptionSet) -> Plan {
    let subcommand = if options.install { "develop" } else { "build" };
    let mut args = vec![subcommand];
    if !options.debug {
        args.push("--release");
    }

    Plan::new(format!("PYTHON BUILD ({})", options.profile().as_str()))
        .require("maturin", "building the Python module")
        .with_step(Step::required(CommandSpec::new("maturin", args)))
}

pub fn report(ctx: &ReportContext<'_>) -> Discovery {
    let console = ctx.console;
    console.success(&ctx.with_elapsed("Done!"));

    if ctx.options.install {
        console.suggest("Usage:", USAGE_SNIPPET);
        console.blank();
        return Discovery::NotAttempted;
    }

    let wheel_dir = ctx.layout.wheel_dir();
    let discovery = match latest_matching(&wheel_dir, "*.whl") {
        Some(wheel) => {
            console.info(&format!(
                "Wheel: {} (built {})",
                wheel.path.display(),
                wheel.modified_display()
            ));
            console.suggest("Install with:", &format!("pip install {}", wheel.path.display()));
            Discovery::Found(wheel)
        }
        None => {
            console.warning(&format!("No wheel found in {}", wheel_dir.display()));
            Discovery::NotFound
        }
    };
    console.blank();
    discovery
}
