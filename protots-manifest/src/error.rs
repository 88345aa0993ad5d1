use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Diagnostics carry the whole source text, so errors travel boxed.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The text being parsed and the name it is reported under.
///
/// Every diagnostic built from it renders with the offending snippet:
///
/// ```ignore
/// let doc = SourceContext::new(content, "protots.toml");
/// return Err(doc.validation_error("at least one schema file is required", None));
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    filename: String,
    src: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            src: src.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename.as_str(), self.src.clone())
    }

    /// Malformed TOML; toml reports the byte range itself.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            span: source.span().map(Into::into),
            src: self.named_source(),
            source,
        })
    }

    /// Malformed schema JSON, labelled where serde_json gave up.
    pub fn schema_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Schema {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// A well-formed document with an unusable value.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// The same schema path listed twice; both entries are labelled.
    pub fn duplicate_schema_error(
        &self,
        file: impl Into<String>,
        first_span: SourceSpan,
        second_span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::DuplicateSchemaFile {
            src: self.named_source(),
            first_span,
            second_span,
            file: file.into(),
        })
    }
}

/// Byte offset of a 1-based line and column, as reported by serde_json.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(help("create a protots.toml or pass its location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse protots.toml")]
    #[diagnostic(code(protots::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("schema file '{file}' is listed more than once")]
    #[diagnostic(
        code(protots::duplicate_schema),
        help("each schema file is processed once; remove the second entry")
    )]
    DuplicateSchemaFile {
        #[source_code]
        src: NamedSource<String>,
        #[label("first listed here")]
        first_span: SourceSpan,
        #[label("listed again here")]
        second_span: SourceSpan,
        file: String,
    },

    #[error("{message}")]
    #[diagnostic(code(protots::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to decode schema file")]
    #[diagnostic(
        code(protots::schema_error),
        help("schema files are JSON encodings of a schema file with its declarations")
    )]
    Schema {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid schema here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"name\": 1,\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(4));
        assert_eq!(offset_of(src, 0, 0), None);
        assert_eq!(offset_of(src, 9, 9), Some(src.len()));
    }

    #[test]
    fn test_schema_error_points_into_source() {
        let src = "{\n  \"name\": 1,\n}";
        let source = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = SourceContext::new(src, "bad.json").schema_error(source);
        match *err {
            Error::Schema { span: Some(span), .. } => assert!(span.offset() <= src.len()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
