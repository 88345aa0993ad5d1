//! Reading `protots.toml` from disk or from memory.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, MANIFEST_FILE, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Load a manifest whose relative paths resolve against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = parse_manifest(&content, &path.display().to_string())?;
        manifest.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(manifest)
    }

    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Decode and validate manifest text; `filename` names it in diagnostics.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let doc = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|err| doc.parse_error(err))?;
    validate_manifest(&manifest, &ParseContext::new(doc))?;
    Ok(manifest)
}

/// Checks that need the source text to point at the offending value.
fn validate_manifest(manifest: &Manifest, ctx: &ParseContext) -> Result<()> {
    ctx.validate_output_dir(&manifest.output.dir)?;
    ctx.validate_schema_files(&manifest.schema.files)?;
    Ok(())
}
