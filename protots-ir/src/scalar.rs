//! Scalar field kinds.

use std::str::FromStr;

use crate::TypeRef;

/// Scalar kinds recognised in schema type references.
///
/// This is a language-agnostic representation. Use a `TypeMapper` to convert
/// to language-specific type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 15] = [
        ScalarKind::Double,
        ScalarKind::Float,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Uint32,
        ScalarKind::Uint64,
        ScalarKind::Sint32,
        ScalarKind::Sint64,
        ScalarKind::Fixed32,
        ScalarKind::Fixed64,
        ScalarKind::Sfixed32,
        ScalarKind::Sfixed64,
        ScalarKind::Bool,
        ScalarKind::String,
        ScalarKind::Bytes,
    ];

    /// Get the schema name of this scalar (e.g. `int32`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Double => "double",
            ScalarKind::Float => "float",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Sint32 => "sint32",
            ScalarKind::Sint64 => "sint64",
            ScalarKind::Fixed32 => "fixed32",
            ScalarKind::Fixed64 => "fixed64",
            ScalarKind::Sfixed32 => "sfixed32",
            ScalarKind::Sfixed64 => "sfixed64",
            ScalarKind::Bool => "bool",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "bytes",
        }
    }

    /// Returns true for every integer and floating point kind.
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            ScalarKind::Bool | ScalarKind::String | ScalarKind::Bytes
        )
    }

    /// The scalar named by a type reference, if it names a known scalar.
    pub fn of(type_ref: &TypeRef) -> Option<Self> {
        if !type_ref.is_scalar() {
            return None;
        }
        type_ref.as_str().parse().ok()
    }
}

/// Error returned when a name is not a recognised scalar kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScalar(pub String);

impl std::fmt::Display for UnknownScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown scalar type '{}'", self.0)
    }
}

impl std::error::Error for UnknownScalar {}

impl FromStr for ScalarKind {
    type Err = UnknownScalar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownScalar(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for kind in ScalarKind::ALL {
            assert_eq!(kind.as_str().parse::<ScalarKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_scalar() {
        assert_eq!(
            "float16".parse::<ScalarKind>(),
            Err(UnknownScalar("float16".to_string()))
        );
    }

    #[test]
    fn test_numeric() {
        assert!(ScalarKind::Sfixed64.is_numeric());
        assert!(ScalarKind::Double.is_numeric());
        assert!(!ScalarKind::Bool.is_numeric());
        assert!(!ScalarKind::Bytes.is_numeric());
    }

    #[test]
    fn test_of_type_ref() {
        assert_eq!(ScalarKind::of(&TypeRef::new("bool")), Some(ScalarKind::Bool));
        assert_eq!(ScalarKind::of(&TypeRef::new("pkg.Bool")), None);
        assert_eq!(ScalarKind::of(&TypeRef::new("map")), None);
    }
}
