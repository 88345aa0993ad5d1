//! Files holding one root type, or one service.

use std::path::PathBuf;

use protots_core::GeneratedFile;
use protots_ir::TypeRef;

use super::root_file_path;
use crate::code_file::CodeFile;

/// The file generated for a root record, enum, or service.
#[derive(Debug)]
pub struct TypeFile {
    type_ref: TypeRef,
    code: CodeFile,
}

impl TypeFile {
    pub fn new(type_ref: TypeRef, code: CodeFile) -> Self {
        Self { type_ref, code }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}

impl GeneratedFile for TypeFile {
    fn path(&self) -> PathBuf {
        root_file_path(&self.type_ref)
    }

    fn render(&self) -> String {
        self.code.render()
    }
}
