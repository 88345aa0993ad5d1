//! Core utilities and types for the protots TypeScript generator.
//!
//! This crate provides the output abstraction generated files are written
//! through, and string helpers shared by the code generators.

mod file;
mod output;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult, write_if_changed};
pub use output::{DiskOutput, MemoryOutput, OutputSink};
// String utilities
pub use utils::{doc_lines, lower_first, quote_string, to_kebab_case};
