//! The slice of TypeScript syntax the emitters produce. Every node is a
//! consuming builder that lays itself out as code fragments.

mod class;
mod constructor;
mod enumeration;
mod exports;
mod imports;
mod method;
mod param;
mod property;

use protots_codegen::builder::{CodeFragment, Renderable};

pub use class::{Class, ClassExport};
pub use constructor::Constructor;
pub use enumeration::Enum;
pub use exports::Export;
pub use imports::Import;
pub use method::Method;
pub use param::Param;
pub use property::{Decorator, Property, association};

/// A top-level declaration in a generated file.
#[derive(Debug, Clone)]
pub enum Declaration {
    Class(Class),
    Enum(Enum),
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Declaration::Class(c) => c.to_fragments(),
            Declaration::Enum(e) => e.to_fragments(),
        }
    }
}

impl From<Class> for Declaration {
    fn from(value: Class) -> Self {
        Declaration::Class(value)
    }
}

impl From<Enum> for Declaration {
    fn from(value: Enum) -> Self {
        Declaration::Enum(value)
    }
}
