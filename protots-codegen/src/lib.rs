//! Target-independent pieces of the protots generators: line-oriented
//! text assembly ([`builder`]), the contract a target language implements
//! ([`language`]), and helpers for tests that write real files ([`testing`]).

pub mod builder;
pub mod language;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
