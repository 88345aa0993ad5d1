//! Fully-qualified schema type references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fully-qualified schema type identifier, like `com.example.Outer.Inner`.
///
/// Segments starting with a lower-case character form the package path,
/// segments starting with an upper-case character form the nested-name path.
/// A single lower-case segment without dots (`int32`, `string`) names a scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The reference as written, e.g. `com.example.Outer.Inner`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package segments, like `["com", "example"]` in `com.example.Outer.Inner`.
    pub fn package_path(&self) -> Vec<&str> {
        self.segments().filter(|s| starts_lowercase(s)).collect()
    }

    /// Nested type names, like `["Outer", "Inner"]` in `com.example.Outer.Inner`.
    pub fn name_path(&self) -> Vec<&str> {
        self.segments().filter(|s| !starts_lowercase(s)).collect()
    }

    /// Returns true for scalar references such as `int32` or `bytes`.
    pub fn is_scalar(&self) -> bool {
        !self.0.contains('.') && starts_lowercase(&self.0)
    }

    /// Returns true if this type is not nested inside another type.
    pub fn is_root(&self) -> bool {
        self.name_path().len() == 1
    }

    /// The last nested name, e.g. `Inner` for `com.example.Outer.Inner`.
    pub fn simple_name(&self) -> &str {
        self.name_path().last().copied().unwrap_or(self.0.as_str())
    }

    /// The top-level type enclosing this one (itself if already a root).
    pub fn root(&self) -> TypeRef {
        let names = self.name_path();
        match names.first() {
            Some(&first) if names.len() > 1 => {
                let mut parts = self.package_path();
                parts.push(first);
                TypeRef::new(parts.join("."))
            }
            _ => self.clone(),
        }
    }

    /// A type nested directly inside this one.
    pub fn nested(&self, name: &str) -> TypeRef {
        TypeRef::new(format!("{}.{}", self.0, name))
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|s| !s.is_empty())
    }
}

fn starts_lowercase(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_lowercase)
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}
