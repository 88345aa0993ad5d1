//! Validation of manifest values, with spans pointing into the source.

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Validation context that carries source information.
///
/// Wraps the [`SourceContext`] of the manifest being validated so errors can
/// point at the offending value.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(SourceContext::new(src, "protots.toml"));
/// ctx.validate_schema_files(&manifest.schema.files)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    pub fn new(source: SourceContext) -> Self {
        Self { source }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// The output directory must not be blank.
    pub fn validate_output_dir(&self, dir: &str) -> Result<()> {
        if dir.trim().is_empty() {
            let span = find_value_spans(self.src(), dir)
                .into_iter()
                .next()
                .or_else(|| find_key_span(self.src(), "dir"));
            return Err(self
                .source
                .validation_error("output directory cannot be blank", span));
        }
        Ok(())
    }

    /// At least one schema file, no blank entries, and no file listed twice.
    pub fn validate_schema_files(&self, files: &[String]) -> Result<()> {
        if files.is_empty() {
            return Err(self.source.validation_error(
                "at least one schema file is required",
                find_key_span(self.src(), "files"),
            ));
        }

        for (i, file) in files.iter().enumerate() {
            if file.trim().is_empty() {
                return Err(self.source.validation_error(
                    "schema file path cannot be blank",
                    find_value_spans(self.src(), file).into_iter().next(),
                ));
            }
            if files[..i].contains(file) {
                let spans = find_value_spans(self.src(), file);
                if let [first, second, ..] = spans[..] {
                    return Err(self.source.duplicate_schema_error(file, first, second));
                }
                return Err(self.source.validation_error(
                    format!("schema file '{}' is listed more than once", file),
                    spans.first().copied(),
                ));
            }
        }
        Ok(())
    }
}

/// Spans of every quoted occurrence of `value` in the TOML source, covering
/// the text between the quotes.
pub(crate) fn find_value_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        spans.extend(
            src.match_indices(&pattern)
                .map(|(pos, _)| SourceSpan::from((pos + 1, value.len()))),
        );
    }
    spans.sort_by_key(|span| span.offset());
    spans
}

/// Span of a key at the start of a line, such as `files = [...]`.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let is_assignment = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_assignment {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}
