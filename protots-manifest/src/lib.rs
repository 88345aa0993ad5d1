//! Manifest parsing for protots.
//!
//! A `protots.toml` names the schema files to generate from, in processing
//! order, and the directory generated sources are written to:
//!
//! ```toml
//! [output]
//! dir = "generated"
//!
//! [schema]
//! files = ["geology.json", "dinosaurs.json"]
//! ```
//!
//! Errors are [`miette`] diagnostics pointing into the offending source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use manifest::{DEFAULT_OUTPUT_DIR, Manifest, OutputConfig, ParseContext, SchemaConfig};
pub use schema::{load_schema, parse_schema};

/// Conventional manifest file name.
pub const MANIFEST_FILE: &str = "protots.toml";
