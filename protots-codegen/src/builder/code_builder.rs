use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated source text line by line.
///
/// ```
/// use protots_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.apply_fragment(CodeFragment::block(
///     "enum Period {",
///     vec![CodeFragment::line("JURASSIC = \"JURASSIC\",")],
///     Some("}".into()),
/// ));
/// assert_eq!(builder.build(), "enum Period {\n  JURASSIC = \"JURASSIC\",\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    out: String,
    depth: usize,
    unit: Indent,
}

impl CodeBuilder {
    pub fn new(unit: Indent) -> Self {
        Self {
            out: String::new(),
            depth: 0,
            unit,
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn push_line(&mut self, text: &str) -> &mut Self {
        self.pad();
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.push_line("//")
        } else {
            self.push_line(&format!("// {text}"))
        }
    }

    /// Nest every following line one level deeper.
    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Undo one [`push_indent`](Self::push_indent); a no-op at the top level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        self.apply_all(node.to_fragments());
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => {
                self.push_line(&text);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
            CodeFragment::Indent(body) => self.nested(body),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.nested(body);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    pub fn build(self) -> String {
        self.out
    }

    fn apply_all(&mut self, fragments: Vec<CodeFragment>) {
        fragments
            .into_iter()
            .for_each(|fragment| self.apply_fragment(fragment));
    }

    fn nested(&mut self, body: Vec<CodeFragment>) {
        self.push_indent();
        self.apply_all(body);
        self.push_dedent();
    }

    fn pad(&mut self) {
        let unit = self.unit.as_str();
        self.out.extend(std::iter::repeat_n(unit, self.depth));
    }
}
