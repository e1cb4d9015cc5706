//! Static usage text

const USAGE: &str = r#"
 PACKAGER-RS BOOTSTRAP

 COMMANDS
   build     Build Rust CLI binary
   python    Build Python module (maturin develop)
   test      Run cargo tests
   bench     Run criterion benchmarks
   docs      Build documentation
   clean     Clean build artifacts
   help      Show this help

 OPTIONS
   -d, --debug     Build in debug mode (default: release)
   -i, --install   For python: install in current venv (default: build only)
   -h, --help      Show this help
   -v, --verbose   Print diagnostics (project root, plan, exit codes)
       --no-color  Disable colored output
   -V, --version   Print version

 EXAMPLES
   bootstrap build              # Build release CLI
   bootstrap build -d           # Build debug CLI
   bootstrap python             # Build wheel only (release)
   bootstrap python -i          # Build and install in venv
   bootstrap python -d          # Build wheel (debug)
   bootstrap test               # Run all tests

 PYTHON USAGE (after python build)
   from packager import Package, Env, Evar, App, Storage, Solver

   pkg = Package("maya", "2026.1.0")
   pkg.add_req("redshift@>=3.5")

   storage = Storage.scan()
   pkg.solve(storage.packages)
   print(pkg.deps)
"#;

pub fn usage() -> &'static str {
    USAGE
}

/// Print the usage text to stdout
pub fn show() {
    println!("{}", usage());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_operation() {
        for op in ["build", "python", "test", "bench", "docs", "clean", "help"] {
            assert!(usage().contains(&format!("   {op} ")), "missing {op}");
        }
    }
}
