//! TypeScript code generator for protots.
//!
//! Turns schema declarations (records, enums and services) into TypeScript
//! sources meant for [class-transformer](https://github.com/typestack/class-transformer):
//! records become classes with `@Type` associations and constructors, enums
//! become string enums, and services become network clients.
//!
//! # Usage
//!
//! ```ignore
//! use protots_codegen_typescript::{Generator, MemoryOutput};
//!
//! let mut generator = Generator::new(MemoryOutput::new());
//! generator.process_files(&schema_files)?;
//! let report = generator.finish()?;
//! for reference in &report.unresolved {
//!     eprintln!("{reference}");
//! }
//! ```
//!
//! # Generated Output
//!
//! - `<package segments>/<RootName>.ts` per root record, enum, or service,
//!   nested types included in their root's file
//! - `<package segments>/ServiceNetworkClient.ts` next to each service
//!
//! Files may be processed in any order. A field whose type is declared by a
//! later file is written with a placeholder and patched in place once that
//! file has been processed.

mod code_file;
mod context;
mod deferred;
mod error;
mod generator;
mod import_path;
mod name_resolver;
mod type_mapper;

pub mod ast;
pub mod emit;
pub mod files;

pub use code_file::{CodeFile, RawCode};
pub use context::GenerationContext;
pub use deferred::{DeferredReferenceRegistry, find_residual_placeholders, placeholder_token};
pub use error::{Error, Result};
pub use generator::{Generator, TypeScriptCodegen};
pub use import_path::ImportPathResolver;
pub use name_resolver::NameResolver;
pub use protots_codegen::language::{
    GenerateResult, LanguageCodegen, PreviewFile, UnresolvedReference,
};
pub use protots_core::{DiskOutput, MemoryOutput, OutputSink};
pub use type_mapper::{TIMESTAMP, TypeScriptTypeMapper};
