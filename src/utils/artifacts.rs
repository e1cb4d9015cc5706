//! Locating build outputs for the final report
//!
//! Nothing here is allowed to fail an operation: a missing directory, an
//! unreadable entry or a pattern with no matches all come back as `None`.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// A produced file and when it was last written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl ArtifactRef {
    /// Modification time as a local timestamp, e.g. `2026-10-19 14:03:11`
    pub fn modified_display(&self) -> String {
        let local: DateTime<Local> = self.modified.into();
        local.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Find the most recently modified file in `dir` matching `pattern`
///
/// Only direct children of `dir` are considered. Ties on modification time
/// go to the greater file name so the answer does not depend on directory
/// iteration order.
pub fn latest_matching(dir: &Path, pattern: &str) -> Option<ArtifactRef> {
    if !dir.is_dir() {
        return None;
    }

    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let full_pattern = format!("{}/{}", escaped, pattern);

    glob::glob(&full_pattern)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter_map(|path| {
            let metadata = path.metadata().ok()?;
            if !metadata.is_file() {
                return None;
            }
            let modified = metadata.modified().ok()?;
            Some(ArtifactRef { path, modified })
        })
        .max_by(|a, b| {
            a.modified
                .cmp(&b.modified)
                .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
        })
}

/// Platform file name of an executable, `pkg` or `pkg.exe`
pub fn executable_name(stem: &str) -> String {
    format!("{}{}", stem, std::env::consts::EXE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, age_secs: u64) -> PathBuf {
        let path = dir.join(name);
        let file = File::create(&path).unwrap();
        let mtime = SystemTime::now() - Duration::from_secs(age_secs);
        file.set_modified(mtime).unwrap();
        path
    }

    #[test]
    fn test_latest_matching_prefers_newest() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.whl", 3_600);
        let newer = touch(temp_dir.path(), "b.whl", 10);

        let found = latest_matching(temp_dir.path(), "*.whl").unwrap();
        assert_eq!(found.path, newer);
    }

    #[test]
    fn test_latest_matching_ignores_other_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let wheel = touch(temp_dir.path(), "packager-0.1.0.whl", 3_600);
        touch(temp_dir.path(), "packager-0.1.0.tar.gz", 0);

        let found = latest_matching(temp_dir.path(), "*.whl").unwrap();
        assert_eq!(found.path, wheel);
    }

    #[test]
    fn test_latest_matching_is_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        touch(&nested, "deep.whl", 0);

        assert!(latest_matching(temp_dir.path(), "*.whl").is_none());
    }

    #[test]
    fn test_latest_matching_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(latest_matching(temp_dir.path(), "*.whl").is_none());
    }

    #[test]
    fn test_latest_matching_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("wheels");
        assert!(latest_matching(&missing, "*.whl").is_none());
    }

    #[test]
    fn test_latest_matching_tie_breaks_on_name() {
        let temp_dir = TempDir::new().unwrap();
        let mtime = SystemTime::now() - Duration::from_secs(60);
        for name in ["x.whl", "y.whl"] {
            File::create(temp_dir.path().join(name))
                .unwrap()
                .set_modified(mtime)
                .unwrap();
        }

        let found = latest_matching(temp_dir.path(), "*.whl").unwrap();
        assert_eq!(found.path.file_name().unwrap(), "y.whl");
    }

    #[test]
    fn test_executable_name() {
        let name = executable_name("pkg");
        if cfg!(windows) {
            assert_eq!(name, "pkg.exe");
        } else {
            assert_eq!(name, "pkg");
        }
    }
}
