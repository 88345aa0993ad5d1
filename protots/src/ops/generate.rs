//! Generate operation - TypeScript output for a set of schema files.

use std::path::Path;

use eyre::{Context, Result};
use protots_codegen_typescript::{LanguageCodegen, TypeScriptCodegen};
use protots_ir::SchemaFile;

use crate::reports::{GenerateReport, PreviewReport};

/// Write generated files into `output_dir`.
pub fn generate(schemas: &[SchemaFile], output_dir: &Path) -> Result<GenerateReport> {
    let result = TypeScriptCodegen::new(schemas)
        .generate(output_dir)
        .wrap_err("Failed to generate code")?;

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        written: result.written,
        unchanged: result.unchanged,
        unresolved: result.unresolved,
    })
}

/// Render generated files in memory without touching the disk.
pub fn preview(schemas: &[SchemaFile]) -> Result<PreviewReport> {
    let files = TypeScriptCodegen::new(schemas)
        .preview()
        .wrap_err("Failed to generate code")?;
    Ok(PreviewReport { files })
}
