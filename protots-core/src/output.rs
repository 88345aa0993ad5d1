//! Destinations for generated files.

use std::{
    io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

/// A place generated files are written to and read back from.
///
/// Paths are always relative to the sink's root. Generated files are re-read
/// when deferred references are patched, so every sink must return what was
/// last written.
pub trait OutputSink {
    /// Read a previously written file.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Write a file, creating parent directories as needed.
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;

    /// Check whether a file exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Writes files below a root directory on disk.
#[derive(Debug, Clone)]
pub struct DiskOutput {
    root: PathBuf,
}

impl DiskOutput {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for DiskOutput {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(path))
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full, contents)?;
        tracing::trace!(path = %full.display(), "wrote file to disk");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }
}

/// Keeps files in memory, in first-write order.
///
/// Used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    files: IndexMap<PathBuf, String>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a file, if written.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// All files written so far.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().map(|(p, c)| (p.as_path(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputSink for MemoryOutput {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} was never written", path.display()),
            )
        })
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_disk_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let mut out = DiskOutput::new(temp.path());
        let path = Path::new("a/b/c/Test.ts");

        out.write(path, "nested").unwrap();

        assert!(out.exists(path));
        assert_eq!(
            fs::read_to_string(temp.path().join(path)).unwrap(),
            "nested"
        );
        assert_eq!(out.read(path).unwrap(), "nested");
    }

    #[test]
    fn test_disk_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let mut out = DiskOutput::new(temp.path());
        let path = Path::new("Test.ts");

        out.write(path, "first").unwrap();
        out.write(path, "second").unwrap();

        assert_eq!(out.read(path).unwrap(), "second");
    }

    #[test]
    fn test_disk_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let out = DiskOutput::new(temp.path());

        let err = out.read(Path::new("Missing.ts")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!out.exists(Path::new("Missing.ts")));
    }

    #[test]
    fn test_memory_keeps_first_write_order() {
        let mut out = MemoryOutput::new();
        out.write(Path::new("b/B.ts"), "b").unwrap();
        out.write(Path::new("a/A.ts"), "a").unwrap();
        out.write(Path::new("b/B.ts"), "b2").unwrap();

        let files: Vec<_> = out.files().collect();
        assert_eq!(
            files,
            vec![(Path::new("b/B.ts"), "b2"), (Path::new("a/A.ts"), "a")]
        );
        assert_eq!(out.get("a/A.ts"), Some("a"));
    }

    #[test]
    fn test_memory_read_missing_file() {
        let out = MemoryOutput::new();
        let err = out.read(Path::new("Missing.ts")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
