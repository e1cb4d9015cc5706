//! Project root discovery and the fixed layout of the packager-rs tree

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::BootstrapError;
use crate::utils::artifacts::executable_name;

/// Manifest that marks the project root
const MANIFEST: &str = "Cargo.toml";

/// Find the project root
///
/// The executable's own location wins, so a `bootstrap` built into
/// `<root>/target/<profile>/` always drives its own checkout. Otherwise the
/// working directory and its parents are searched.
pub fn find_project_root() -> Result<PathBuf> {
    let mut searched = Vec::new();

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        if let Some(root) = find_project_root_from(&exe_dir) {
            return Ok(root);
        }
        searched.push(exe_dir);
    }

    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(root) = find_project_root_from(&current_dir) {
        return Ok(root);
    }
    searched.push(current_dir);

    Err(BootstrapError::project_not_found(searched).into())
}

/// Find the nearest ancestor of `start` (inclusive) that holds a Cargo.toml
pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(MANIFEST).is_file())
        .map(Path::to_path_buf)
}

/// Build profile selected by `--debug`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    pub fn from_debug_flag(debug: bool) -> Self {
        if debug {
            Profile::Debug
        } else {
            Profile::Release
        }
    }

    /// Directory name under `target/` and label used in headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }
}

/// Fixed locations and names inside the orchestrated project
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Project root; every command runs here unless a step says otherwise
    pub root: PathBuf,
    /// Stem of the CLI executable
    pub binary_stem: &'static str,
    /// Crate name rustdoc writes its index under
    pub doc_crate: &'static str,
    /// Name of the integration test target
    pub integration_test: &'static str,
    /// Name of the criterion bench target
    pub bench_target: &'static str,
    /// Book sources, relative to the root
    pub book_dir: &'static str,
}

impl ProjectLayout {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            binary_stem: "pkg",
            doc_crate: "packager",
            integration_test: "integration",
            bench_target: "scan_bench",
            book_dir: "docs",
        }
    }

    /// Get the target directory for build outputs
    pub fn target_dir(&self) -> PathBuf {
        self.root.join("target")
    }

    /// Path of the CLI binary for a profile, `target/<profile>/pkg[.exe]`
    pub fn binary_path(&self, profile: Profile) -> PathBuf {
        self.target_dir()
            .join(profile.as_str())
            .join(executable_name(self.binary_stem))
    }

    /// Directory maturin writes wheels into
    pub fn wheel_dir(&self) -> PathBuf {
        self.target_dir().join("wheels")
    }

    /// Rustdoc entry page, relative to the root
    pub fn rustdoc_index(&self) -> String {
        format!("target/doc/{}/index.html", self.doc_crate)
    }

    /// Book entry page, relative to the root
    pub fn book_index(&self) -> String {
        format!("{}/book/index.html", self.book_dir)
    }

    /// Criterion HTML report, relative to the root
    pub fn bench_report(&self) -> &'static str {
        "target/criterion/report/index.html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_root_from_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Cargo.toml"), "[workspace]\n").unwrap();
        let nested = temp_dir.path().join("target").join("release");
        fs::create_dir_all(&nested).unwrap();

        let root = find_project_root_from(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_find_root_prefers_nearest_manifest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Cargo.toml"), "[workspace]\n").unwrap();
        let member = temp_dir.path().join("crates").join("core");
        fs::create_dir_all(&member).unwrap();
        fs::write(member.join("Cargo.toml"), "[package]\n").unwrap();

        assert_eq!(find_project_root_from(&member).unwrap(), member);
    }

    #[test]
    fn test_find_root_ignores_manifest_directory() {
        let temp_dir = TempDir::new().unwrap();
        let start = temp_dir.path().join("a");
        fs::create_dir_all(start.join("Cargo.toml")).unwrap();

        let found = find_project_root_from(&start);
        assert!(found.map_or(true, |root| root != start));
    }

    #[test]
    fn test_binary_path() {
        let layout = ProjectLayout::new(PathBuf::from("/work/packager-rs"));
        let path = layout.binary_path(Profile::Debug);
        assert!(path.starts_with("/work/packager-rs/target/debug"));
        assert_eq!(path.file_name().unwrap().to_string_lossy(), executable_name("pkg"));
    }

    #[test]
    fn test_fixed_locations() {
        let layout = ProjectLayout::new(PathBuf::from("/work"));
        assert_eq!(layout.wheel_dir(), PathBuf::from("/work/target/wheels"));
        assert_eq!(layout.rustdoc_index(), "target/doc/packager/index.html");
        assert_eq!(layout.book_index(), "docs/book/index.html");
    }

    #[test]
    fn test_profile_from_flag() {
        assert_eq!(Profile::from_debug_flag(true).as_str(), "debug");
        assert_eq!(Profile::from_debug_flag(false).as_str(), "release");
    }
}
