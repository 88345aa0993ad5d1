//! TypeScript type mapper implementation.

use protots_codegen::language::TypeMapper;
use protots_ir::{ScalarKind, TypeRef};

/// The well-known timestamp type, mapped to `Date`.
pub const TIMESTAMP: &str = "google.protobuf.Timestamp";

/// Package of the well-known types. Nothing in it is ever imported.
pub const WELL_KNOWN_PACKAGE: &str = "google.protobuf";

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_scalar(&self, kind: ScalarKind) -> &'static str {
        match kind {
            ScalarKind::Bool => "boolean",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "Uint8Array",
            _ => "number",
        }
    }

    fn map_well_known(&self, type_ref: &TypeRef) -> Option<&'static str> {
        (type_ref.as_str() == TIMESTAMP).then_some("Date")
    }

    fn map_repeated(&self, element: &str) -> String {
        format!("{}[]", element)
    }
}
