//! Loading schema files referenced by the manifest.

use std::path::Path;

use protots_ir::SchemaFile;

use crate::{Error, Result, error::SourceContext};

/// Read and decode one JSON-encoded schema file.
pub fn load_schema(path: impl AsRef<Path>) -> Result<SchemaFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_schema(&content, &path.display().to_string())
}

/// Decode a JSON-encoded schema file, using `filename` for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<SchemaFile> {
    serde_json::from_str(content)
        .map_err(|e| SourceContext::new(content, filename).schema_error(e))
}
