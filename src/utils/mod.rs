//! Shared utilities: terminal output, tool detection, timing, artifacts and paths

pub mod artifacts;
pub mod paths;
pub mod terminal;
pub mod timing;
pub mod tools;
