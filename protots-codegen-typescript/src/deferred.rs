//! Placeholders for references to types that are not known yet.
//!
//! A field whose type has not been declared yet is written with a
//! `{{fieldDecorator:<TypeRef>}}` token in front of its declaration. Once the
//! type arrives, every file holding such a token is re-read and the token is
//! replaced by the association decorator (or removed, for enums).

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use protots_core::{OutputSink, WriteResult, write_if_changed};
use protots_ir::{TypeDecl, TypeRef};

use crate::{Error, NameResolver, Result, ast::association};

const TOKEN_PREFIX: &str = "{{fieldDecorator:";
const TOKEN_SUFFIX: &str = "}}";

/// Indentation of class members in generated files.
pub const MEMBER_INDENT: &str = "  ";

/// The placeholder written in place of an unresolved association.
pub fn placeholder_token(type_ref: &TypeRef) -> String {
    format!("{}{}{}", TOKEN_PREFIX, type_ref, TOKEN_SUFFIX)
}

/// Type references of every placeholder still present in `contents`, in
/// order of appearance.
pub fn find_residual_placeholders(contents: &str) -> Vec<TypeRef> {
    let mut found = Vec::new();
    let mut rest = contents;
    while let Some(start) = rest.find(TOKEN_PREFIX) {
        let after = &rest[start + TOKEN_PREFIX.len()..];
        let Some(end) = after.find(TOKEN_SUFFIX) else {
            break;
        };
        found.push(TypeRef::new(&after[..end]));
        rest = &after[end + TOKEN_SUFFIX.len()..];
    }
    found
}

/// Tracks unresolved field types per declaring type, and the output file of
/// every root type. Both tables only grow during a run.
#[derive(Debug, Default)]
pub struct DeferredReferenceRegistry {
    unresolved: IndexMap<TypeRef, IndexSet<TypeRef>>,
    paths: IndexMap<TypeRef, PathBuf>,
}

impl DeferredReferenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `declaring` holds a placeholder for `field_type`.
    pub fn add_unresolved_field_type(&mut self, field_type: &TypeRef, declaring: &TypeRef) {
        self.unresolved
            .entry(declaring.clone())
            .or_default()
            .insert(field_type.clone());
    }

    /// Record the output file of a root type.
    pub fn set_path_for_type(&mut self, path: impl Into<PathBuf>, root: &TypeRef) {
        self.paths.insert(root.clone(), path.into());
    }

    /// The output file holding `type_ref`, found through its root type.
    pub fn path_for(&self, type_ref: &TypeRef) -> Option<&Path> {
        self.paths.get(&type_ref.root()).map(PathBuf::as_path)
    }

    /// Every recorded placeholder whose type is still unknown to `names`, as
    /// `(declaring type, referenced type)` pairs.
    pub fn pending<'a>(&'a self, names: &NameResolver) -> Vec<(&'a TypeRef, &'a TypeRef)> {
        self.unresolved
            .iter()
            .flat_map(|(declaring, refs)| refs.iter().map(move |r| (declaring, r)))
            .filter(|(_, r)| names.type_for(r).is_none())
            .collect()
    }

    /// Patch every file holding placeholders for the newly known types.
    ///
    /// Replacements are grouped per file: each file is read once and written
    /// only when its content changed, so repeating a pass is a no-op.
    /// Returns the files that were rewritten.
    pub fn resolve(
        &self,
        newly_known: &[&TypeDecl],
        names: &NameResolver,
        sink: &mut dyn OutputSink,
    ) -> Result<Vec<PathBuf>> {
        let mut patches: IndexMap<&Path, Vec<(String, String)>> = IndexMap::new();
        for (declaring, refs) in &self.unresolved {
            let hits: Vec<&TypeDecl> = newly_known
                .iter()
                .copied()
                .filter(|decl| refs.contains(decl.type_ref()))
                .collect();
            if hits.is_empty() {
                continue;
            }

            let path = self
                .path_for(declaring)
                .ok_or_else(|| Error::MissingOutputPath {
                    type_ref: declaring.clone(),
                })?;
            let replacements = patches.entry(path).or_default();
            for decl in hits {
                replacements.push((
                    placeholder_token(decl.type_ref()),
                    replacement_for(decl, names)?,
                ));
            }
        }

        let mut patched = Vec::new();
        for (path, replacements) in patches {
            let original = sink.read(path).map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let contents = replacements
                .iter()
                .fold(original, |acc, (token, text)| acc.replace(token, text));
            let result = write_if_changed(sink, path, &contents).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
            if result == WriteResult::Written {
                tracing::debug!(path = %path.display(), "patched deferred references");
                patched.push(path.to_path_buf());
            }
        }
        Ok(patched)
    }
}

/// Text that replaces the placeholder of a now-known type.
///
/// Records get their association decorator on its own line, re-indented so
/// the patched file matches one generated with the type already known.
fn replacement_for(decl: &TypeDecl, names: &NameResolver) -> Result<String> {
    match decl {
        TypeDecl::Record(record) => Ok(format!(
            "{}\n{}",
            association(&names.name_for(&record.type_ref)?),
            MEMBER_INDENT
        )),
        TypeDecl::Enum(_) => Ok(String::new()),
        TypeDecl::Service(service) => Err(Error::UnsupportedDeclaration {
            type_ref: service.type_ref.clone(),
            kind: decl.kind(),
            usage: "used as a field type",
        }),
    }
}

#[cfg(test)]
mod tests {
    use protots_core::MemoryOutput;
    use protots_ir::{Enum, Record, Service};

    use super::*;

    fn egg() -> TypeDecl {
        Record::new("dinos.Egg").into()
    }

    fn period() -> TypeDecl {
        Enum::new("geology.Period").into()
    }

    fn nest_file() -> String {
        format!(
            "export default class Nest {{\n  {}egg: Egg\n  {}period: Period\n}}\n",
            placeholder_token(&"dinos.Egg".into()),
            placeholder_token(&"geology.Period".into())
        )
    }

    fn registry_with_nest(out: &mut MemoryOutput) -> DeferredReferenceRegistry {
        let nest = TypeRef::new("dinos.Nest");
        let mut registry = DeferredReferenceRegistry::new();
        registry.add_unresolved_field_type(&"dinos.Egg".into(), &nest);
        registry.add_unresolved_field_type(&"geology.Period".into(), &nest);
        registry.set_path_for_type("dinos/Nest.ts", &nest);
        out.write(Path::new("dinos/Nest.ts"), &nest_file()).unwrap();
        registry
    }

    #[test]
    fn test_token_format() {
        assert_eq!(
            placeholder_token(&"dinos.Egg".into()),
            "{{fieldDecorator:dinos.Egg}}"
        );
    }

    #[test]
    fn test_find_residual_placeholders() {
        let refs = find_residual_placeholders(&nest_file());
        assert_eq!(
            refs,
            vec![TypeRef::new("dinos.Egg"), TypeRef::new("geology.Period")]
        );
        assert!(find_residual_placeholders("x: {{fieldDecorator:broken").is_empty());
        assert!(find_residual_placeholders("plain").is_empty());
    }

    #[test]
    fn test_resolve_patches_only_known_types() {
        let mut out = MemoryOutput::new();
        let registry = registry_with_nest(&mut out);
        let egg = egg();

        let patched = registry
            .resolve(&[&egg], &NameResolver::new(), &mut out)
            .unwrap();

        assert_eq!(patched, vec![PathBuf::from("dinos/Nest.ts")]);
        assert_eq!(
            out.get("dinos/Nest.ts").unwrap(),
            "export default class Nest {\n  @Type(() => Egg)\n  egg: Egg\n  {{fieldDecorator:geology.Period}}period: Period\n}\n"
        );
    }

    #[test]
    fn test_resolve_enum_removes_token() {
        let mut out = MemoryOutput::new();
        let registry = registry_with_nest(&mut out);
        let (egg, period) = (egg(), period());

        registry
            .resolve(&[&egg, &period], &NameResolver::new(), &mut out)
            .unwrap();

        assert_eq!(
            out.get("dinos/Nest.ts").unwrap(),
            "export default class Nest {\n  @Type(() => Egg)\n  egg: Egg\n  period: Period\n}\n"
        );
    }

    #[test]
    fn test_resolve_twice_is_noop() {
        let mut out = MemoryOutput::new();
        let registry = registry_with_nest(&mut out);
        let egg = egg();
        let names = NameResolver::new();

        registry.resolve(&[&egg], &names, &mut out).unwrap();
        let again = registry.resolve(&[&egg], &names, &mut out).unwrap();

        assert!(again.is_empty());
    }

    #[test]
    fn test_nested_declaring_type_uses_root_path() {
        let mut registry = DeferredReferenceRegistry::new();
        registry.set_path_for_type("dinos/Dinosaur.ts", &"dinos.Dinosaur".into());

        assert_eq!(
            registry.path_for(&"dinos.Dinosaur.Nest".into()),
            Some(Path::new("dinos/Dinosaur.ts"))
        );
        assert_eq!(registry.path_for(&"dinos.Egg".into()), None);
    }

    #[test]
    fn test_missing_output_path() {
        let mut registry = DeferredReferenceRegistry::new();
        registry.add_unresolved_field_type(&"dinos.Egg".into(), &"dinos.Nest".into());
        let egg = egg();

        let err = registry
            .resolve(&[&egg], &NameResolver::new(), &mut MemoryOutput::new())
            .unwrap_err();
        assert!(matches!(err, Error::MissingOutputPath { type_ref } if type_ref.as_str() == "dinos.Nest"));
    }

    #[test]
    fn test_service_cannot_resolve_a_field() {
        let mut out = MemoryOutput::new();
        let mut registry = registry_with_nest(&mut out);
        registry.add_unresolved_field_type(&"dinos.Hatchery".into(), &"dinos.Nest".into());
        let hatchery: TypeDecl = Service::new("dinos.Hatchery").into();

        let err = registry
            .resolve(&[&hatchery], &NameResolver::new(), &mut out)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedDeclaration { .. }));
    }

    #[test]
    fn test_pending_lists_unknown_types() {
        let mut out = MemoryOutput::new();
        let registry = registry_with_nest(&mut out);
        let mut names = NameResolver::new();
        names.add(&egg());

        let pending: Vec<_> = registry
            .pending(&names)
            .into_iter()
            .map(|(d, r)| (d.as_str(), r.as_str()))
            .collect();
        assert_eq!(pending, vec![("dinos.Nest", "geology.Period")]);
    }
}
