use indexmap::IndexSet;
use protots_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// One `.ts` module: an import block, then top-level declarations separated
/// by a blank line.
///
/// Imports are deduplicated; the first occurrence keeps its position unless
/// [`sorted_imports`](Self::sorted_imports) is requested.
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: IndexSet<Import>,
    sorted: bool,
    declarations: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.insert(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    pub fn sorted_imports(mut self) -> Self {
        self.sorted = true;
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, declaration: impl Renderable) -> Self {
        self.add_all([declaration])
    }

    pub fn add_all<R: Renderable>(mut self, declarations: impl IntoIterator<Item = R>) -> Self {
        self.declarations
            .extend(declarations.into_iter().map(|node| node.to_fragments()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.declarations.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = CodeBuilder::typescript();

        let mut import_lines: Vec<String> = self.imports.iter().map(Import::line).collect();
        if self.sorted {
            import_lines.sort();
        }
        for line in &import_lines {
            out.push_line(line);
        }

        let mut separate = !import_lines.is_empty();
        for declaration in &self.declarations {
            if separate {
                out.push_blank();
            }
            separate = true;
            for fragment in declaration {
                out.apply_fragment(fragment.clone());
            }
        }
        out.build()
    }
}

/// Fixed source text, line by line.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| match line {
                "" => CodeFragment::blank(),
                text => CodeFragment::line(text),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_renders_nothing() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_declarations_are_separated() {
        let file = CodeFile::new()
            .add(RawCode::new("enum A {}\n\nexport default A;"))
            .add(RawCode::new("export enum A_B {}"));
        assert_eq!(
            file.render(),
            "enum A {}\n\nexport default A;\n\nexport enum A_B {}\n"
        );
    }

    #[test]
    fn test_repeated_import_is_written_once() {
        let egg = || Import::new("./Egg").default("Egg");
        let file = CodeFile::new()
            .import(egg())
            .import(Import::new("./Nest").default("Nest"))
            .import(egg())
            .add(RawCode::new("export default class Clutch {}"));

        assert_eq!(
            file.render(),
            "import Egg from \"./Egg\"\nimport Nest from \"./Nest\"\n\nexport default class Clutch {}\n"
        );
    }

    #[test]
    fn test_sorted_imports_put_relative_paths_first() {
        let file = CodeFile::new()
            .import(Import::new("class-transformer").named("serialize"))
            .import(Import::new("./ServiceNetworkClient").default("ServiceNetworkClient"))
            .sorted_imports();

        assert_eq!(
            file.render(),
            "import ServiceNetworkClient from \"./ServiceNetworkClient\"\nimport { serialize } from \"class-transformer\"\n"
        );
    }
}
