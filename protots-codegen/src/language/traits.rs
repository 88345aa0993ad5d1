use std::path::Path;

use eyre::Result;
use protots_ir::{ScalarKind, TypeRef};

/// A target language the command line can generate.
pub trait LanguageCodegen {
    fn language(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;

    /// Every file a run would produce, without touching the filesystem.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Write the run into `output_dir`, leaving identical files untouched.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Outcome of a run, paths relative to the output directory.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub written: Vec<String>,
    /// Already held exactly the generated text.
    pub unchanged: Vec<String>,
    /// References that were never declared by any input
    pub unresolved: Vec<UnresolvedReference>,
}

impl GenerateResult {
    /// True when every referenced type was resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// A placeholder left in a generated file because its type never arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// Relative path of the file holding the placeholder
    pub file: String,
    /// The referenced type
    pub type_ref: TypeRef,
}

impl std::fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: unresolved reference to {}", self.file, self.type_ref)
    }
}

#[derive(Debug)]
pub struct PreviewFile {
    /// Relative to the output directory, `/`-separated.
    pub path: String,
    pub content: String,
}

/// How schema scalars and well-known types are spelled in a target language.
pub trait TypeMapper {
    fn language(&self) -> &'static str;

    /// Map a scalar kind to a language-specific type string
    fn map_scalar(&self, kind: ScalarKind) -> &'static str;

    /// Map a well-known schema type to a native type, if the language has one
    fn map_well_known(&self, _type_ref: &TypeRef) -> Option<&'static str> {
        None
    }

    /// Map a repeated element type (e.g., `string[]` in TS)
    fn map_repeated(&self, element: &str) -> String;
}
