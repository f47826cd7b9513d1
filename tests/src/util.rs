use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A hosts file living in its own temporary directory.
pub struct HostsFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl HostsFixture {
    pub fn new(contents: &str) -> Self {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("hosts");
        fs::write(&path, contents).unwrap();
        Self { _dir: dir, path }
    }

    /// A path inside a temporary directory where no file exists.
    pub fn missing() -> Self {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("hosts");
        Self { _dir: dir, path }
    }

    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }
}

pub const SCENARIO: &str = "127.0.0.1 localhost\n# comment\n192.168.1.1 myrouter\n";
