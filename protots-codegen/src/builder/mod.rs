//! Line-oriented text assembly shared by the language generators.
//!
//! Syntax nodes describe themselves as [`CodeFragment`]s through
//! [`Renderable`]; a [`CodeBuilder`] lays the fragments out with the
//! nesting-dependent [`Indent`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
