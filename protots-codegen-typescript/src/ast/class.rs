//! TypeScript class builder.

use protots_codegen::builder::{CodeFragment, Renderable};

/// How a class is exported from its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassExport {
    /// `export default class`
    Default,
    /// `export class`
    Named,
}

/// Builder for TypeScript classes.
///
/// The body is a list of sections (properties, constructor, methods)
/// separated by blank lines. Empty sections are dropped.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    export: ClassExport,
    doc: Vec<String>,
    sections: Vec<Vec<CodeFragment>>,
}

impl Class {
    pub fn new(name: impl Into<String>, export: ClassExport) -> Self {
        Self {
            name: name.into(),
            export,
            doc: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn doc<'a>(mut self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        self.doc = lines.into_iter().map(str::to_string).collect();
        self
    }

    /// Append a body section.
    pub fn section(mut self, fragments: Vec<CodeFragment>) -> Self {
        if !fragments.is_empty() {
            self.sections.push(fragments);
        }
        self
    }

    /// Append a body section holding a single node.
    pub fn member(self, node: &impl Renderable) -> Self {
        self.section(node.to_fragments())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> String {
        let export = match self.export {
            ClassExport::Default => "export default",
            ClassExport::Named => "export",
        };
        format!("{} class {}", export, self.name)
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = CodeFragment::comments(self.doc.iter().map(String::as_str));
        if self.sections.is_empty() {
            fragments.push(CodeFragment::line(format!("{} {{}}", self.header())));
            return fragments;
        }

        let mut body = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(section.iter().cloned());
        }
        fragments.push(CodeFragment::block(
            format!("{} {{", self.header()),
            body,
            Some("}".to_string()),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use protots_codegen::builder::CodeBuilder;

    use super::*;

    fn render(class: &Class) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(class);
        builder.build()
    }

    #[test]
    fn test_empty_class() {
        let c = Class::new("Empty", ClassExport::Default).doc(["Nothing here."]);
        assert_eq!(render(&c), "// Nothing here.\nexport default class Empty {}\n");
    }

    #[test]
    fn test_sections_separated_by_blank_lines() {
        let c = Class::new("Nest", ClassExport::Named)
            .section(vec![CodeFragment::line("a: number")])
            .section(Vec::new())
            .section(vec![CodeFragment::line("b: number")]);
        assert_eq!(
            render(&c),
            "export class Nest {\n  a: number\n\n  b: number\n}\n"
        );
    }
}
