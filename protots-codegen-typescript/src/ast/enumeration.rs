//! TypeScript enum builder.

use protots_codegen::builder::{CodeFragment, Renderable};

use super::Export;

#[derive(Debug, Clone)]
struct Member {
    name: String,
    doc: Vec<String>,
}

/// Builder for string-valued TypeScript enums (`NAME = "NAME",`).
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Vec<String>,
    members: Vec<Member>,
    default_export: bool,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            members: Vec::new(),
            default_export: false,
        }
    }

    pub fn doc<'a>(mut self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        self.doc = lines.into_iter().map(str::to_string).collect();
        self
    }

    pub fn member(mut self, name: impl Into<String>, doc: &[&str]) -> Self {
        self.members.push(Member {
            name: name.into(),
            doc: doc.iter().map(|line| line.to_string()).collect(),
        });
        self
    }

    /// Declare the enum privately and follow it with `export default Name;`.
    pub fn default_export(mut self) -> Self {
        self.default_export = true;
        self
    }

    fn header(&self) -> String {
        let export = if self.default_export { "" } else { "export " };
        format!("{}enum {}", export, self.name)
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = CodeFragment::comments(self.doc.iter().map(String::as_str));
        if self.members.is_empty() {
            fragments.push(CodeFragment::line(format!("{} {{}}", self.header())));
        } else {
            let body = self
                .members
                .iter()
                .flat_map(|m| {
                    let mut lines = CodeFragment::comments(m.doc.iter().map(String::as_str));
                    lines.push(CodeFragment::line(format!("{0} = \"{0}\",", m.name)));
                    lines
                })
                .collect();
            fragments.push(CodeFragment::block(
                format!("{} {{", self.header()),
                body,
                Some("}".to_string()),
            ));
        }
        if self.default_export {
            fragments.push(CodeFragment::blank());
            fragments.extend(Export::default_of(self.name.as_str()).to_fragments());
        }
        fragments
    }
}
