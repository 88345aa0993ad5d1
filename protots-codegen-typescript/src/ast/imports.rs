//! TypeScript import builder.

use protots_codegen::builder::{CodeFragment, Renderable};

/// Builder for TypeScript import statements.
///
/// Generated sources omit statement semicolons, so imports render as
/// `import Foo from "./Foo"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// The module specifier, e.g. `../geology/Period`.
    pub fn module(&self) -> &str {
        &self.from
    }

    /// Render the import as a single line without trailing newline.
    pub fn line(&self) -> String {
        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from \"{}\"", def, self.from),
            (Some(def), false) => format!(
                "import {}, {{ {} }} from \"{}\"",
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {{ {} }} from \"{}\"",
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import \"{}\"", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.line())]
    }
}
