//! Documentation command implementation
//!
//! Rustdoc is mandatory. The mdbook book is built afterwards when mdbook is
//! installed, and skipped with a warning when it is not.

use super::{Discovery, Plan, ReportContext, Step};
use crate::exec::subprocess::CommandSpec;
use crate::utils::paths::ProjectLayout;

/// `cargo doc --no-deps`, then `mdbook build` inside the book directory
pub fn plan(layout: &ProjectLayout) -> Plan {
    Plan::new("DOCS")
        .with_step(Step::required(CommandSpec::new("cargo", ["doc", "--no-deps"])))
        .with_step(Step::optional(
            CommandSpec::new("mdbook", ["build"]).in_dir(layout.book_dir),
        ))
}

pub fn report(ctx: &ReportContext<'_>) -> Discovery {
    let console = ctx.console;
    console.success(&ctx.with_elapsed("Done!"));
    console.info(&format!("Rustdoc: {}", ctx.layout.rustdoc_index()));
    if !ctx.was_skipped("mdbook") {
        console.info(&format!("Mdbook:  {}", ctx.layout.book_index()));
    }
    console.blank();
    Discovery::Computed(ctx.layout.root.join(ctx.layout.rustdoc_index()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tools::ToolRequirement;
    use std::path::PathBuf;

    #[test]
    fn test_docs_plan() {
        let plan = plan(&ProjectLayout::new(PathBuf::from("/work")));
        assert_eq!(plan.title, "DOCS");
        assert_eq!(plan.command_lines(), ["cargo doc --no-deps", "mdbook build"]);
        assert_eq!(plan.steps[0].requirement, ToolRequirement::Required);
        assert_eq!(plan.steps[1].requirement, ToolRequirement::Optional);
        assert_eq!(plan.steps[1].command.dir, Some(PathBuf::from("docs")));
        assert!(plan.preconditions.is_empty());
    }
}
