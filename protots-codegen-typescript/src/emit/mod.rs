//! Emitters turning schema declarations into TypeScript files.

mod enumeration;
mod record;
mod service;

use protots_ir::TypeDecl;

pub use service::{rpc_path, service_file};

use crate::{
    Error, GenerationContext, ImportPathResolver, Result,
    ast::{Declaration, Import},
    code_file::CodeFile,
    files::TypeFile,
};

/// Emit the file of a root record or enum, nested types included.
pub fn type_file(decl: &TypeDecl, context: &mut GenerationContext) -> Result<TypeFile> {
    let declarations = declarations(decl, context)?;
    let code = CodeFile::new()
        .imports(type_imports(decl, context)?)
        .add_all(declarations);
    Ok(TypeFile::new(decl.type_ref().clone(), code))
}

/// One declaration per type, nested types flattened in depth-first pre-order.
fn declarations(decl: &TypeDecl, context: &mut GenerationContext) -> Result<Vec<Declaration>> {
    let mut out = Vec::new();
    for current in decl.types_and_nested_types() {
        out.push(match current {
            TypeDecl::Record(record) => record::record_class(record, context)?.into(),
            TypeDecl::Enum(e) => enumeration::enum_declaration(e, &context.names)?.into(),
            TypeDecl::Service(service) => {
                return Err(Error::UnsupportedDeclaration {
                    type_ref: service.type_ref.clone(),
                    kind: current.kind(),
                    usage: "rendered as a data type",
                });
            }
        });
    }
    Ok(out)
}

/// Imports of a type file: the `class-transformer` decorator whenever any
/// non-scalar type is referenced, then one import per referenced type in
/// first-reference order. Types of the same file, native types and the
/// well-known package are skipped.
fn type_imports(decl: &TypeDecl, context: &GenerationContext) -> Result<Vec<Import>> {
    let refs = decl.referenced_types_and_nested_referenced_types();
    if refs.is_empty() {
        return Ok(Vec::new());
    }

    let root = decl.type_ref().root();
    let mut imports = vec![Import::new("class-transformer").named("Type")];
    for type_ref in refs {
        if !context.names.needs_import(type_ref) || type_ref.root() == root {
            continue;
        }
        imports.push(ImportPathResolver::import_for(
            decl.type_ref(),
            type_ref,
            &context.names,
        )?);
    }
    Ok(imports)
}
