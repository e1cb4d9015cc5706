//! bootstrap - build front-end for the packager-rs workspace
//!
//! One entry point for building the CLI and the Python module, running
//! tests and benchmarks, generating docs and cleaning, on every platform.
//!
//! ## Architecture
//!
//! ```text
//! cli → dispatch (Plan per Operation) → exec::subprocess → cargo / maturin / mdbook
//! ```

mod cli;
mod commands;
mod dispatch;
mod error;
mod exec;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.execute()
}
