//! What a target language provides to the command line: generation into a
//! directory, an in-memory preview, and a mapping of schema scalars.

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper, UnresolvedReference};
