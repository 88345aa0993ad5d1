use protots_codegen::builder::{CodeFragment, Renderable};

/// `export default Name;`, written after a declaration that cannot carry
/// the `export default` modifier itself, such as a root enum.
#[derive(Debug, Clone)]
pub struct Export {
    name: String,
}

impl Export {
    pub fn default_of(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn line(&self) -> String {
        format!("export default {};", self.name)
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.line())]
    }
}
