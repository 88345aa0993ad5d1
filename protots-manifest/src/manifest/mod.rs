//! Manifest types and parsing for protots.toml files.

mod parse;
mod validate;

use std::path::{Path, PathBuf};

use protots_ir::SchemaFile;
use serde::Deserialize;
pub use validate::ParseContext;

use crate::{Result, schema::load_schema};

/// Default output directory, relative to the manifest.
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Root manifest for protots.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where generated sources go
    #[serde(default)]
    pub output: OutputConfig,

    /// Schema files, processed in the listed order
    pub schema: SchemaConfig,

    /// Directory the manifest was loaded from; relative paths resolve here
    #[serde(skip)]
    root: PathBuf,
}

/// The `[output]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

/// The `[schema]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    pub files: Vec<String>,
}

impl Manifest {
    /// Directory relative paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The output directory, resolved against the manifest directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output.dir)
    }

    /// Schema file paths in processing order, resolved against the manifest
    /// directory.
    pub fn schema_paths(&self) -> Vec<PathBuf> {
        self.schema
            .files
            .iter()
            .map(|file| self.root.join(file))
            .collect()
    }

    /// Load every schema file in processing order.
    pub fn load_schemas(&self) -> Result<Vec<SchemaFile>> {
        self.schema_paths().iter().map(load_schema).collect()
    }
}
