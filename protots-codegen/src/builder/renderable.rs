/// One piece of output, before indentation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// Text written on its own line at the current depth.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `// text` at the current depth; empty text renders as `//`.
    Comment(String),
    /// Fragments nested one level deeper.
    Indent(Vec<CodeFragment>),
    /// `open`, the body one level deeper, then `close` back at the outer depth.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// A comment per line of a doc block.
    pub fn comments<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        lines.into_iter().map(Self::comment).collect()
    }

    pub fn indent(body: Vec<CodeFragment>) -> Self {
        Self::Indent(body)
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }
}

/// A syntax node that knows how it is laid out.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_block_becomes_comments() {
        let doc = "Common name.\n\nLike \"Stegosaurus\".";
        assert_eq!(
            CodeFragment::comments(doc.lines()),
            vec![
                CodeFragment::Comment("Common name.".into()),
                CodeFragment::Comment(String::new()),
                CodeFragment::Comment("Like \"Stegosaurus\".".into()),
            ]
        );
    }

    #[test]
    fn test_boxed_node_delegates() {
        struct Marker;
        impl Renderable for Marker {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::blank()]
            }
        }

        let boxed: Box<dyn Renderable> = Box::new(Marker);
        assert_eq!(boxed.to_fragments(), vec![CodeFragment::Blank]);
        assert_eq!((&Marker).to_fragments(), vec![CodeFragment::Blank]);
    }
}
