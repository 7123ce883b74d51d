//! Shared helpers for the `lexis` integration suites.

#![allow(dead_code, reason = "each suite uses a subset of the helpers")]

use std::convert::Infallible;
use std::fs;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Wrapper for values supplied via behaviour-driven test steps.
#[derive(Clone, Debug)]
pub struct StepText {
    raw: String,
}

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''))
            .to_owned();

        Ok(Self { raw })
    }
}

impl AsRef<str> for StepText {
    fn as_ref(&self) -> &str {
        self.raw.as_str()
    }
}

/// Temporary directory holding a configuration file and its bundles.
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    /// Create an empty directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap_or_else(|error| panic!("tempdir: {error}"));
        Self { dir }
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> Utf8PathBuf {
        let root = Utf8Path::from_path(self.dir.path())
            .unwrap_or_else(|| panic!("temporary directory should be UTF-8"));
        root.join(name)
    }

    /// Write `contents` to `name`, creating parent directories.
    pub fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|error| panic!("create {parent}: {error}"));
        }
        fs::write(&path, contents).unwrap_or_else(|error| panic!("write {path}: {error}"));
        path
    }
}
