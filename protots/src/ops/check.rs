//! Check operation - reference resolution without writing files.

use std::path::Path;

use eyre::{Context, Result};
use protots_codegen_typescript::{Generator, MemoryOutput};
use protots_ir::SchemaFile;

use crate::reports::CheckReport;

/// Run generation in memory and collect every reference left unresolved.
pub fn check(schemas: &[SchemaFile], config_path: &Path) -> Result<CheckReport> {
    let mut generator = Generator::new(MemoryOutput::new());
    generator
        .process_files(schemas)
        .wrap_err("Generation failed")?;
    let result = generator.finish().wrap_err("Generation failed")?;

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        schema_count: schemas.len(),
        type_count: schemas.iter().map(|s| s.all_types().len()).sum(),
        file_count: generator.sink().len(),
        unresolved: result.unresolved,
    })
}
