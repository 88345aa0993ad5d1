//! Type declarations: records, enums and services.

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// A parsed schema declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDecl {
    /// A structured message.
    Record(Record),
    /// An enumeration.
    Enum(Enum),
    /// A remote service.
    Service(Service),
}

/// Discriminant of a [`TypeDecl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Record,
    Enum,
    Service,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Record => "record",
            DeclKind::Enum => "enum",
            DeclKind::Service => "service",
        }
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeDecl {
    pub fn type_ref(&self) -> &TypeRef {
        match self {
            TypeDecl::Record(r) => &r.type_ref,
            TypeDecl::Enum(e) => &e.type_ref,
            TypeDecl::Service(s) => &s.type_ref,
        }
    }

    pub fn kind(&self) -> DeclKind {
        match self {
            TypeDecl::Record(_) => DeclKind::Record,
            TypeDecl::Enum(_) => DeclKind::Enum,
            TypeDecl::Service(_) => DeclKind::Service,
        }
    }

    pub fn documentation(&self) -> &str {
        match self {
            TypeDecl::Record(r) => &r.documentation,
            TypeDecl::Enum(e) => &e.documentation,
            TypeDecl::Service(s) => &s.documentation,
        }
    }

    /// Types declared directly inside this one.
    pub fn nested_types(&self) -> &[TypeDecl] {
        match self {
            TypeDecl::Record(r) => &r.nested,
            TypeDecl::Enum(_) | TypeDecl::Service(_) => &[],
        }
    }

    /// This declaration followed by every nested declaration, depth first.
    pub fn types_and_nested_types(&self) -> Vec<&TypeDecl> {
        let mut out = vec![self];
        for nested in self.nested_types() {
            out.extend(nested.types_and_nested_types());
        }
        out
    }

    /// Non-scalar types referenced by fields of this type and its nested types,
    /// in declaration order. May contain duplicates.
    pub fn referenced_types_and_nested_referenced_types(&self) -> Vec<&TypeRef> {
        let mut refs = Vec::new();
        if let TypeDecl::Record(record) = self {
            refs.extend(
                record
                    .fields_and_one_of_fields()
                    .map(|f| &f.type_ref)
                    .filter(|t| !t.is_scalar()),
            );
        }
        for nested in self.nested_types() {
            refs.extend(nested.referenced_types_and_nested_referenced_types());
        }
        refs
    }
}

/// A structured message type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub one_ofs: Vec<OneOf>,
    #[serde(default)]
    pub nested: Vec<TypeDecl>,
}

impl Record {
    pub fn new(type_ref: impl Into<TypeRef>) -> Self {
        Self {
            type_ref: type_ref.into(),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn one_of(mut self, one_of: OneOf) -> Self {
        self.one_ofs.push(one_of);
        self
    }

    pub fn nested(mut self, decl: impl Into<TypeDecl>) -> Self {
        self.nested.push(decl.into());
        self
    }

    /// Declared fields followed by the fields of every oneof group.
    pub fn fields_and_one_of_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .chain(self.one_ofs.iter().flat_map(|o| o.fields.iter()))
    }

    /// Declared fields with [`Cardinality::Required`].
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|f| f.cardinality == Cardinality::Required)
    }

    pub fn field_count(&self) -> usize {
        self.fields_and_one_of_fields().count()
    }
}

/// How many values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    #[default]
    Required,
    Optional,
    Repeated,
}

/// A field of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Name used on the wire in JSON, preferred over `name` when present.
    #[serde(default)]
    pub json_name: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub cardinality: Cardinality,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub documentation: String,
}

impl Field {
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            json_name: None,
            type_ref: type_ref.into(),
            cardinality: Cardinality::Required,
            default: None,
            documentation: String::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.cardinality = Cardinality::Optional;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.cardinality = Cardinality::Repeated;
        self
    }

    pub fn json_name(mut self, name: impl Into<String>) -> Self {
        self.json_name = Some(name.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }

    /// The member name in generated code.
    pub fn member_name(&self) -> &str {
        self.json_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }
}

/// A group of mutually exclusive fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OneOf {
    pub name: String,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl OneOf {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// An enumeration type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Enum {
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub constants: Vec<EnumConstant>,
}

impl Enum {
    pub fn new(type_ref: impl Into<TypeRef>) -> Self {
        Self {
            type_ref: type_ref.into(),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }

    pub fn constant(mut self, name: impl Into<String>, doc: impl Into<String>) -> Self {
        self.constants.push(EnumConstant {
            name: name.into(),
            documentation: doc.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumConstant {
    pub name: String,
    #[serde(default)]
    pub documentation: String,
}

/// A remote service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub documentation: String,
    #[serde(default)]
    pub rpcs: Vec<Rpc>,
}

impl Service {
    pub fn new(type_ref: impl Into<TypeRef>) -> Self {
        Self {
            type_ref: type_ref.into(),
            ..Self::default()
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }

    pub fn rpc(mut self, rpc: Rpc) -> Self {
        self.rpcs.push(rpc);
        self
    }

    /// The declared service name, e.g. `DinosaursService`.
    pub fn name(&self) -> &str {
        self.type_ref.simple_name()
    }

    /// Request and response types of every RPC, in declaration order.
    pub fn request_and_response_types(&self) -> Vec<&TypeRef> {
        self.rpcs
            .iter()
            .flat_map(|rpc| [&rpc.request_type, &rpc.response_type])
            .collect()
    }
}

/// A remote procedure of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rpc {
    pub name: String,
    pub request_type: TypeRef,
    pub response_type: TypeRef,
    #[serde(default)]
    pub documentation: String,
}

impl Rpc {
    pub fn new(
        name: impl Into<String>,
        request_type: impl Into<TypeRef>,
        response_type: impl Into<TypeRef>,
    ) -> Self {
        Self {
            name: name.into(),
            request_type: request_type.into(),
            response_type: response_type.into(),
            documentation: String::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }
}

impl From<Record> for TypeDecl {
    fn from(value: Record) -> Self {
        TypeDecl::Record(value)
    }
}

impl From<Enum> for TypeDecl {
    fn from(value: Enum) -> Self {
        TypeDecl::Enum(value)
    }
}

impl From<Service> for TypeDecl {
    fn from(value: Service) -> Self {
        TypeDecl::Service(value)
    }
}
