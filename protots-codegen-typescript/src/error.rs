//! Errors raised while generating TypeScript.

use std::path::PathBuf;

use protots_ir::{DeclKind, TypeRef};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown scalar type `{name}`")]
    UnknownScalar { name: String },

    #[error("type reference `{0}` does not name a type")]
    InvalidTypeRef(TypeRef),

    #[error("{kind} `{type_ref}` cannot be {usage}")]
    UnsupportedDeclaration {
        type_ref: TypeRef,
        kind: DeclKind,
        usage: &'static str,
    },

    #[error("rpc `{rpc}` of `{service}` uses `{type_ref}`, which is not declared")]
    UnknownRpcType {
        service: TypeRef,
        rpc: String,
        type_ref: TypeRef,
    },

    #[error("no output file was recorded for `{type_ref}`")]
    MissingOutputPath { type_ref: TypeRef },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
