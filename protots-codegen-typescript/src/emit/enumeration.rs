use protots_core::doc_lines;
use protots_ir::Enum;

use crate::{NameResolver, Result, ast};

/// Root enums are declared privately and default-exported; nested enums
/// are named exports.
pub(super) fn enum_declaration(e: &Enum, names: &NameResolver) -> Result<ast::Enum> {
    let mut declaration = ast::Enum::new(names.name_for(&e.type_ref)?)
        .doc(doc_lines(&e.documentation));
    for constant in &e.constants {
        declaration = declaration.member(&constant.name, &doc_lines(&constant.documentation));
    }
    if e.type_ref.is_root() {
        declaration = declaration.default_export();
    }
    Ok(declaration)
}
