//! Relative import paths between generated files.

use protots_ir::TypeRef;

use crate::{Error, NameResolver, Result, ast::Import};

/// Computes module specifiers between the files of two types.
///
/// Each root type lives at `<package segments>/<RootName>.ts`, so the
/// relative path only depends on the two package paths and the destination's
/// root name.
pub struct ImportPathResolver;

impl ImportPathResolver {
    /// The directory of `to` relative to the directory of `from`, such as
    /// `../geology` or `.`.
    pub fn relative_dir(from: &TypeRef, to: &TypeRef) -> String {
        let source = from.package_path();
        let destination = to.package_path();
        let common = source
            .iter()
            .zip(&destination)
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = vec![".."; source.len() - common];
        if parts.is_empty() {
            parts.push(".");
        }
        parts.extend(&destination[common..]);
        parts.join("/")
    }

    /// The module specifier for the file declaring `to`, e.g. `../geology/Period`.
    pub fn module_path(from: &TypeRef, to: &TypeRef) -> Result<String> {
        let module = to
            .name_path()
            .first()
            .copied()
            .ok_or_else(|| Error::InvalidTypeRef(to.clone()))?;
        Ok(format!("{}/{}", Self::relative_dir(from, to), module))
    }

    /// The import bringing `to` into the file of `from`.
    ///
    /// Root types are default exports; nested types are named exports of
    /// their root's file.
    pub fn import_for(from: &TypeRef, to: &TypeRef, names: &NameResolver) -> Result<Import> {
        let import = Import::new(Self::module_path(from, to)?);
        let name = names.name_for(to)?;
        Ok(if to.is_root() {
            import.default(name)
        } else {
            import.named(name)
        })
    }
}
