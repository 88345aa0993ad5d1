//! Helpers for generator tests that go through the filesystem.
//!
//! Compiled for this crate's own tests and behind the `testing` feature.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Compare generated text against what a test expects, naming the first
/// differing line instead of dumping both files.
#[track_caller]
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }
    let mut expected_lines = expected.lines();
    let mut actual_lines = actual.lines();
    let mut number = 1;
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (Some(want), Some(got)) if want == got => number += 1,
            (None, None) => panic!("content differs only in trailing newlines"),
            (want, got) => panic!(
                "content differs at line {number}\n  expected: {}\n  actual:   {}",
                want.unwrap_or("<end of file>"),
                got.unwrap_or("<end of file>"),
            ),
        }
    }
}

/// Run `generate` against a fresh temporary directory, which is removed
/// when the returned handle drops.
pub fn generate_to_temp(generate: impl FnOnce(&Path) -> Result<()>) -> Result<tempfile::TempDir> {
    let dir = tempfile::tempdir()?;
    generate(dir.path())?;
    Ok(dir)
}

/// List every file below `root` as sorted relative paths with `/` separators.
pub fn list_files(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    let mut pending = vec![PathBuf::from(root)];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if let Ok(relative) = path.strip_prefix(root) {
                let parts: Vec<_> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                files.push(parts.join("/"));
            }
        }
    }
    files.sort();
    Ok(files)
}
