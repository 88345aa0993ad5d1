//! Class properties.

use protots_codegen::builder::{CodeFragment, Renderable};

/// What precedes a property to tell `class-transformer` its runtime type.
#[derive(Debug, Clone, PartialEq)]
pub enum Decorator {
    /// Nothing (scalars and enums).
    None,
    /// `@Type(() => Name)` on its own line.
    Association(String),
    /// A token written in front of the property, patched once the type is known.
    Placeholder(String),
}

/// The association decorator for a class-typed property.
pub fn association(type_name: &str) -> String {
    format!("@Type(() => {})", type_name)
}

/// A class property such as `name?: string = undefined`.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    ty: String,
    optional: bool,
    initializer: Option<String>,
    doc: Vec<String>,
    decorator: Decorator,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            initializer: None,
            doc: Vec::new(),
            decorator: Decorator::None,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn initializer(mut self, value: Option<String>) -> Self {
        self.initializer = value;
        self
    }

    pub fn doc<'a>(mut self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        self.doc = lines.into_iter().map(str::to_string).collect();
        self
    }

    pub fn decorator(mut self, decorator: Decorator) -> Self {
        self.decorator = decorator;
        self
    }

    fn declaration(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        match &self.initializer {
            Some(value) => format!("{}{}: {} = {}", self.name, optional, self.ty, value),
            None => format!("{}{}: {}", self.name, optional, self.ty),
        }
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = CodeFragment::comments(self.doc.iter().map(String::as_str));
        match &self.decorator {
            Decorator::None => fragments.push(CodeFragment::line(self.declaration())),
            Decorator::Association(type_name) => {
                fragments.push(CodeFragment::line(association(type_name)));
                fragments.push(CodeFragment::line(self.declaration()));
            }
            Decorator::Placeholder(token) => {
                fragments.push(CodeFragment::line(format!(
                    "{}{}",
                    token,
                    self.declaration()
                )));
            }
        }
        fragments
    }
}
