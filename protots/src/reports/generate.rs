//! Generate command report data structures.

use std::path::PathBuf;

use protots_codegen_typescript::{PreviewFile, UnresolvedReference};

use super::output::{Output, Report};

/// Report data from writing generated files.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files whose content changed, relative to the output directory.
    pub written: Vec<String>,
    /// Files that already held the generated content.
    pub unchanged: Vec<String>,
    /// Placeholders left in generated files.
    pub unresolved: Vec<UnresolvedReference>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for reference in &self.unresolved {
            out.warning(&reference.to_string());
        }

        out.key_value("Generated", &format!("{}/", self.output_dir.display()));
        if !self.written.is_empty() {
            out.newline();
            out.section("Written");
            for file in &self.written {
                out.added_item(file);
            }
        }
        if !self.unchanged.is_empty() {
            out.newline();
            out.preformatted(&format!("{} unchanged", files(self.unchanged.len())));
        }
    }
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }
        out.divider("Summary");
        out.preformatted(&format!("{} would be generated", files(self.files.len())));
    }
}

fn files(count: usize) -> String {
    format!("{} file{}", count, if count == 1 { "" } else { "s" })
}
