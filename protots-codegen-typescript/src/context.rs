//! Shared state of one generation run.

use protots_ir::{SchemaFile, TypeDecl};

use crate::{DeferredReferenceRegistry, NameResolver};

/// Everything emitters need to resolve references across schema files.
///
/// Owned by the [`Generator`](crate::Generator) for a single run.
#[derive(Debug, Default)]
pub struct GenerationContext {
    pub names: NameResolver,
    pub deferred: DeferredReferenceRegistry,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every declaration of a file, nested types included.
    ///
    /// Returns the declarations that were not known before, in depth-first
    /// declaration order.
    pub fn register<'f>(&mut self, file: &'f SchemaFile) -> Vec<&'f TypeDecl> {
        file.all_types()
            .into_iter()
            .filter(|decl| self.names.add(decl))
            .collect()
    }
}
