use std::{
    io,
    path::{Path, PathBuf},
};

use crate::OutputSink;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the output root
    fn path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to a sink, skipping identical content
    fn write(&self, sink: &mut dyn OutputSink) -> io::Result<WriteResult> {
        write_if_changed(sink, &self.path(), &self.render())
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had this content
    Unchanged,
}

/// Write `contents` to `path` unless the sink already holds exactly that.
pub fn write_if_changed(
    sink: &mut dyn OutputSink,
    path: &Path,
    contents: &str,
) -> io::Result<WriteResult> {
    if sink.exists(path) && sink.read(path)? == contents {
        return Ok(WriteResult::Unchanged);
    }
    sink.write(path, contents)?;
    Ok(WriteResult::Written)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{DiskOutput, MemoryOutput};

    struct Note(&'static str);

    impl GeneratedFile for Note {
        fn path(&self) -> PathBuf {
            PathBuf::from("notes").join("Note.ts")
        }

        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_write_new_file() {
        let mut out = MemoryOutput::new();
        let result = Note("hello").write(&mut out).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(out.get("notes/Note.ts"), Some("hello"));
    }

    #[test]
    fn test_write_identical_content_is_unchanged() {
        let mut out = MemoryOutput::new();
        Note("hello").write(&mut out).unwrap();

        assert_eq!(
            Note("hello").write(&mut out).unwrap(),
            WriteResult::Unchanged
        );
        assert_eq!(Note("bye").write(&mut out).unwrap(), WriteResult::Written);
        assert_eq!(out.get("notes/Note.ts"), Some("bye"));
    }

    #[test]
    fn test_write_to_disk() {
        let temp = TempDir::new().unwrap();
        let mut out = DiskOutput::new(temp.path());

        Note("on disk").write(&mut out).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("notes/Note.ts")).unwrap(),
            "on disk"
        );
    }
}
