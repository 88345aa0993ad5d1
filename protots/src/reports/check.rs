//! Check command report data structures.

use std::path::PathBuf;

use protots_codegen_typescript::UnresolvedReference;

use super::output::{Output, Report};

/// Report data from a check run.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of schema files processed.
    pub schema_count: usize,
    /// Number of declared types, nested types included.
    pub type_count: usize,
    /// Number of files generation would produce.
    pub file_count: usize,
    /// References to types no schema file declares.
    pub unresolved: Vec<UnresolvedReference>,
}

impl CheckReport {
    /// Whether every reference resolved.
    pub fn is_valid(&self) -> bool {
        self.unresolved.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for reference in &self.unresolved {
            out.error(&reference.to_string());
        }
        if !self.is_valid() {
            out.newline();
            out.preformatted(&format!(
                "✗ {} has {} unresolved reference{}",
                self.config_path.display(),
                self.unresolved.len(),
                if self.unresolved.len() == 1 { "" } else { "s" }
            ));
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.list_item(&format!("{} schema files", self.schema_count));
        out.list_item(&format!("{} types", self.type_count));
        out.list_item(&format!("{} generated files", self.file_count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(unresolved: Vec<UnresolvedReference>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("protots.toml"),
            schema_count: 2,
            type_count: 5,
            file_count: 4,
            unresolved,
        }
    }

    #[test]
    fn test_valid_report() {
        let mut out = BufferOutput::default();
        report(Vec::new()).render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "✓ protots.toml is valid",
                "",
                "  - 2 schema files",
                "  - 5 types",
                "  - 4 generated files",
            ]
        );
    }

    #[test]
    fn test_invalid_report() {
        let mut out = BufferOutput::default();
        report(vec![UnresolvedReference {
            file: "dinos/Nest.ts".to_string(),
            type_ref: "dinos.Egg".into(),
        }])
        .render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "error: dinos/Nest.ts: unresolved reference to dinos.Egg",
                "",
                "✗ protots.toml has 1 unresolved reference",
            ]
        );
    }
}
