use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new(test_name: &str) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(test_name).tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes each `relative path -> contents` entry, creating parent directories.
    /// Returns the absolute paths in the same order as the input.
    pub fn write_files(&self, files: &BTreeMap<&str, &str>) -> io::Result<Vec<PathBuf>> {
        files
            .iter()
            .map(|(relative, contents)| -> io::Result<PathBuf> {
                let path = self.dir.path().join(relative);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, contents)?;
                Ok(path)
            })
            .collect()
    }

    /// Deletes everything inside the directory but keeps the directory itself.
    pub fn ensure_empty(&self) -> io::Result<()> {
        for entry in fs::read_dir(self.dir.path())? {
            let path = entry?.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    pub fn read_to_string(&self, relative: &str) -> io::Result<String> {
        fs::read_to_string(self.dir.path().join(relative))
    }
}

/// An order book used by several tests.
pub fn order_book() -> &'static str {
    r#"{
        "customer": {"name": "ACME", "vip": true},
        "orders": [
            {"id": "A-1", "qty": 2, "tags": ["rush"]},
            {"id": "A-2", "qty": 1, "tags": []},
            {"id": "A-3", "qty": 2, "note": null}
        ],
        "total": 5
    }"#
}
