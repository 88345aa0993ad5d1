//! Schema files.

use serde::{Deserialize, Serialize};

use crate::{Service, TypeDecl};

/// One parsed schema source and the root declarations it contains.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Source name, used in diagnostics only.
    pub name: String,
    #[serde(default)]
    pub declarations: Vec<TypeDecl>,
}

impl SchemaFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn declare(mut self, decl: impl Into<TypeDecl>) -> Self {
        self.declarations.push(decl.into());
        self
    }

    /// Every declaration in the file with nested types flattened, depth first.
    pub fn all_types(&self) -> Vec<&TypeDecl> {
        self.declarations
            .iter()
            .flat_map(TypeDecl::types_and_nested_types)
            .collect()
    }

    /// Root records and enums, in declaration order.
    pub fn data_types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.declarations
            .iter()
            .filter(|d| !matches!(d, TypeDecl::Service(_)))
    }

    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.declarations.iter().filter_map(|d| match d {
            TypeDecl::Service(s) => Some(s),
            _ => None,
        })
    }
}
