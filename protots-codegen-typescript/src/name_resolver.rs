//! Maps schema type references to TypeScript names.

use indexmap::IndexMap;
use protots_codegen::language::TypeMapper;
use protots_ir::{Record, ScalarKind, TypeDecl, TypeRef};

use crate::{
    Error, Result,
    type_mapper::{TIMESTAMP, TypeScriptTypeMapper, WELL_KNOWN_PACKAGE},
};

/// Resolves TypeScript names and tracks every declaration seen so far.
///
/// The table of known types is append-only: the first registration of a
/// [`TypeRef`] wins. Scalars are never keys.
#[derive(Debug, Clone)]
pub struct NameResolver {
    mapper: TypeScriptTypeMapper,
    known: IndexMap<TypeRef, TypeDecl>,
}

impl NameResolver {
    pub fn new() -> Self {
        let mut resolver = Self {
            mapper: TypeScriptTypeMapper,
            known: IndexMap::new(),
        };
        // Timestamps map to `Date`, which still needs a `@Type` association.
        resolver.add(&Record::new(TIMESTAMP).into());
        resolver
    }

    /// The TypeScript name for a type reference.
    ///
    /// Scalars and well-known types map to native types; anything else maps
    /// to its nested-name path joined with `_` (`pkg.Outer.Inner` becomes
    /// `Outer_Inner`).
    pub fn name_for(&self, type_ref: &TypeRef) -> Result<String> {
        if type_ref.is_scalar() {
            return ScalarKind::of(type_ref)
                .map(|kind| self.mapper.map_scalar(kind).to_string())
                .ok_or_else(|| Error::UnknownScalar {
                    name: type_ref.to_string(),
                });
        }
        if let Some(native) = self.mapper.map_well_known(type_ref) {
            return Ok(native.to_string());
        }
        let names = type_ref.name_path();
        if names.is_empty() {
            return Err(Error::InvalidTypeRef(type_ref.clone()));
        }
        Ok(names.join("_"))
    }

    /// The TypeScript type of a field, with `[]` appended when repeated.
    pub fn field_type(&self, type_ref: &TypeRef, repeated: bool) -> Result<String> {
        let name = self.name_for(type_ref)?;
        Ok(if repeated {
            self.mapper.map_repeated(&name)
        } else {
            name
        })
    }

    /// The registered declaration for a type, if it is known yet.
    pub fn type_for(&self, type_ref: &TypeRef) -> Option<&TypeDecl> {
        self.known.get(type_ref)
    }

    /// Returns true when the type maps to a native TypeScript type and is
    /// never imported.
    pub fn is_native(&self, type_ref: &TypeRef) -> bool {
        type_ref.is_scalar() || self.mapper.map_well_known(type_ref).is_some()
    }

    /// Returns true when a file referencing the type needs an import for it.
    ///
    /// Native types are never imported, and neither is anything in the
    /// well-known package: such files are not generated alongside the output.
    pub fn needs_import(&self, type_ref: &TypeRef) -> bool {
        let well_known = type_ref
            .as_str()
            .strip_prefix(WELL_KNOWN_PACKAGE)
            .is_some_and(|rest| rest.starts_with('.'));
        !well_known && !self.is_native(type_ref)
    }

    /// Register a declaration. Returns false if the type was already known.
    pub fn add(&mut self, decl: &TypeDecl) -> bool {
        if self.known.contains_key(decl.type_ref()) {
            return false;
        }
        self.known.insert(decl.type_ref().clone(), decl.clone());
        true
    }

    /// Number of known types, including pre-registered well-known types.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}
