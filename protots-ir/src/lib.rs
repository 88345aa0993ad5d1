//! Schema model for the protots TypeScript generator.
//!
//! This crate holds the parsed type graph handed to code generation: one
//! [`SchemaFile`] per schema source, each declaring records, enums and
//! services addressed by fully-qualified [`TypeRef`]s.
//!
//! # Architecture
//!
//! ```text
//! schema JSON → protots-manifest (loading) → protots-ir (type graph) → codegen
//! ```
//!
//! The model is:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Immutable once loaded
//! - Serde-encoded, so parsed graphs can be stored as JSON

mod decl;
mod file;
mod scalar;
mod type_ref;

pub use decl::{
    Cardinality, DeclKind, Enum, EnumConstant, Field, OneOf, Record, Rpc, Service, TypeDecl,
};
pub use file::SchemaFile;
pub use scalar::{ScalarKind, UnknownScalar};
pub use type_ref::TypeRef;
