//! Driver running the emitters over schema files, in caller order.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use protots_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile, UnresolvedReference};
use protots_core::{DiskOutput, GeneratedFile, MemoryOutput, OutputSink, WriteResult};
use protots_ir::{SchemaFile, TypeDecl};

use crate::{
    Error, GenerationContext, Result,
    deferred::find_residual_placeholders,
    emit,
    files::{ServiceNetworkClientTs, display_path},
};

/// Generates TypeScript for a sequence of schema files into an output sink.
///
/// Types may reference types of files processed later: such fields are
/// written with a placeholder and patched once the referenced file has been
/// processed. Call [`Generator::finish`] after the last file to collect the
/// report, including references that were never resolved.
///
/// # Example
///
/// ```ignore
/// let mut generator = Generator::new(MemoryOutput::new());
/// generator.process_files(&files)?;
/// let report = generator.finish()?;
/// assert!(report.is_complete());
/// ```
pub struct Generator<S: OutputSink> {
    sink: S,
    context: GenerationContext,
    outputs: IndexMap<PathBuf, WriteResult>,
}

impl<S: OutputSink> Generator<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            context: GenerationContext::new(),
            outputs: IndexMap::new(),
        }
    }

    /// Register, emit and patch one schema file.
    ///
    /// All types of the file are registered before anything is emitted, so
    /// references within the file never produce placeholders.
    pub fn process_file(&mut self, file: &SchemaFile) -> Result<()> {
        tracing::debug!(file = %file.name, "processing schema file");
        let newly_known = self.context.register(file);
        // Identity, not TypeRef: a repeated declaration in the same file
        // shares its TypeRef with the registered one.
        let registered = |decl: &TypeDecl| {
            let fresh = newly_known.iter().any(|known| std::ptr::eq(*known, decl));
            if !fresh {
                tracing::warn!(
                    file = %file.name,
                    type_ref = %decl.type_ref(),
                    "type already declared, skipping"
                );
            }
            fresh
        };

        for decl in file.data_types().filter(|decl| registered(*decl)) {
            let generated = emit::type_file(decl, &mut self.context)?;
            let path = self.write(&generated)?;
            self.context
                .deferred
                .set_path_for_type(path, generated.type_ref());
        }

        let services = file.declarations.iter().filter_map(|decl| match decl {
            TypeDecl::Service(service) if registered(decl) => Some(service),
            _ => None,
        });
        for service in services {
            let generated = emit::service_file(service, &self.context)?;
            self.write(&generated)?;
            self.write(&ServiceNetworkClientTs::beside(&service.type_ref))?;
        }

        let patched =
            self.context
                .deferred
                .resolve(&newly_known, &self.context.names, &mut self.sink)?;
        for path in patched {
            self.record(path, WriteResult::Written);
        }
        Ok(())
    }

    /// Process files in order.
    pub fn process_files<'a>(
        &mut self,
        files: impl IntoIterator<Item = &'a SchemaFile>,
    ) -> Result<()> {
        for file in files {
            self.process_file(file)?;
        }
        Ok(())
    }

    /// Report every file produced so far and every placeholder still left in
    /// them. Dangling references are logged as warnings.
    pub fn finish(&self) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for (path, write) in &self.outputs {
            let shown = display_path(path);
            let contents = self.sink.read(path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?;
            for type_ref in find_residual_placeholders(&contents) {
                tracing::warn!(file = %shown, %type_ref, "unresolved reference");
                result.unresolved.push(UnresolvedReference {
                    file: shown.clone(),
                    type_ref,
                });
            }
            match write {
                WriteResult::Written => result.written.push(shown),
                WriteResult::Unchanged => result.unchanged.push(shown),
            }
        }
        Ok(result)
    }

    pub fn context(&self) -> &GenerationContext {
        &self.context
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn write(&mut self, file: &impl GeneratedFile) -> Result<PathBuf> {
        let path = file.path();
        let result = file.write(&mut self.sink).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %display_path(&path), ?result, "generated file");
        self.record(path.clone(), result);
        Ok(path)
    }

    /// A file written at any point of the run counts as written.
    fn record(&mut self, path: PathBuf, result: WriteResult) {
        let entry = self.outputs.entry(path).or_insert(result);
        if result == WriteResult::Written {
            *entry = WriteResult::Written;
        }
    }
}

/// TypeScript code generator over an ordered set of schema files.
pub struct TypeScriptCodegen<'a> {
    files: &'a [SchemaFile],
}

impl<'a> TypeScriptCodegen<'a> {
    pub fn new(files: &'a [SchemaFile]) -> Self {
        Self { files }
    }
}

impl LanguageCodegen for TypeScriptCodegen<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> eyre::Result<Vec<PreviewFile>> {
        let mut generator = Generator::new(MemoryOutput::new());
        generator.process_files(self.files)?;
        generator.finish()?;
        Ok(generator
            .into_sink()
            .files()
            .map(|(path, content)| PreviewFile {
                path: display_path(path),
                content: content.to_string(),
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> eyre::Result<GenerateResult> {
        let mut generator = Generator::new(DiskOutput::new(output_dir));
        generator.process_files(self.files)?;
        Ok(generator.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use protots_ir::{Enum, Field, Record, Service};

    use super::*;
    use crate::placeholder_token;

    fn nest_file() -> SchemaFile {
        SchemaFile::new("nest.proto").declare(
            Record::new("dinos.Nest").field(Field::new("egg", "dinos.Egg").optional()),
        )
    }

    fn egg_file() -> SchemaFile {
        SchemaFile::new("egg.proto").declare(Record::new("dinos.Egg"))
    }

    #[test]
    fn test_placeholder_until_type_arrives() {
        let mut generator = Generator::new(MemoryOutput::new());
        generator.process_file(&nest_file()).unwrap();

        let token = placeholder_token(&"dinos.Egg".into());
        assert!(generator.sink().get("dinos/Nest.ts").unwrap().contains(&token));
        let report = generator.finish().unwrap();
        assert_eq!(report.unresolved.len(), 1);
        assert_eq!(report.unresolved[0].file, "dinos/Nest.ts");

        generator.process_file(&egg_file()).unwrap();
        let nest = generator.sink().get("dinos/Nest.ts").unwrap();
        assert!(!nest.contains(&token));
        assert!(nest.contains("  @Type(() => Egg)\n  egg?: Egg = undefined\n"));
        assert!(generator.finish().unwrap().is_complete());
    }

    #[test]
    fn test_report_lists_files_in_write_order() {
        let mut generator = Generator::new(MemoryOutput::new());
        generator
            .process_files([&egg_file(), &nest_file()])
            .unwrap();
        let report = generator.finish().unwrap();
        assert_eq!(report.written, vec!["dinos/Egg.ts", "dinos/Nest.ts"]);
        assert!(report.unchanged.is_empty());
    }

    #[test]
    fn test_duplicate_declaration_keeps_first_file() {
        let first = SchemaFile::new("a.proto").declare(Enum::new("geology.Period").constant("JURASSIC", ""));
        let second = SchemaFile::new("b.proto").declare(Record::new("geology.Period"));

        let mut generator = Generator::new(MemoryOutput::new());
        generator.process_files([&first, &second]).unwrap();

        assert!(
            generator
                .sink()
                .get("geology/Period.ts")
                .unwrap()
                .contains("enum Period")
        );
    }

    #[test]
    fn test_repeated_declaration_in_one_file_keeps_the_first() {
        let file = SchemaFile::new("geology.proto")
            .declare(Enum::new("geology.Period").constant("JURASSIC", ""))
            .declare(Record::new("geology.Period").field(Field::new("x", "string")));

        let mut generator = Generator::new(MemoryOutput::new());
        generator.process_file(&file).unwrap();

        let period = generator.sink().get("geology/Period.ts").unwrap();
        assert!(period.contains("enum Period {"), "{period}");
        assert!(!period.contains("class Period"), "{period}");
        assert_eq!(generator.finish().unwrap().written, vec!["geology/Period.ts"]);
    }

    #[test]
    fn test_repeated_service_is_emitted_once() {
        let first = SchemaFile::new("a.proto").declare(Service::new("idle.IdleService").doc("First."));
        let second = SchemaFile::new("b.proto").declare(Service::new("idle.IdleService").doc("Second."));

        let mut generator = Generator::new(MemoryOutput::new());
        generator.process_files([&first, &second]).unwrap();

        let service = generator.sink().get("idle/IdleService.ts").unwrap();
        assert!(service.contains("// First."), "{service}");
        assert!(!service.contains("// Second."), "{service}");
    }

    #[test]
    fn test_preview_through_codegen_trait() {
        let files = [egg_file()];
        let codegen = TypeScriptCodegen::new(&files);
        let preview = codegen.preview().unwrap();
        assert_eq!(codegen.language(), "typescript");
        assert_eq!(preview.len(), 1);
        assert_eq!(preview[0].path, "dinos/Egg.ts");
        assert_eq!(preview[0].content, "export default class Egg {}\n");
    }
}
