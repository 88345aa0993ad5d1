//! Class methods.

use protots_codegen::builder::{CodeFragment, Renderable};

use super::{Param, param::join_params};

/// Builder for class methods.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
    doc: Vec<String>,
    is_async: bool,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
            doc: Vec::new(),
            is_async: false,
        }
    }

    /// Add a parameter.
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the method body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Set the documentation lines.
    pub fn doc<'a>(mut self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        self.doc = lines.into_iter().map(str::to_string).collect();
        self
    }

    /// Make this an async method.
    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    fn signature(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };
        let params = join_params(&self.params);
        match &self.return_type {
            Some(ret) => format!("{}{}({}): {} {{", async_kw, self.name, params, ret),
            None => format!("{}{}({}) {{", async_kw, self.name, params),
        }
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = CodeFragment::comments(self.doc.iter().map(String::as_str));
        fragments.push(CodeFragment::block(
            self.signature(),
            self.body.iter().map(CodeFragment::line).collect(),
            Some("}".to_string()),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use protots_codegen::builder::CodeBuilder;

    use super::*;

    fn render(method: &Method) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(method);
        builder.build()
    }

    #[test]
    fn test_async_method() {
        let m = Method::new("stampede")
            .async_()
            .param(Param::new("request", "StampedeRequest"))
            .returns("Promise<StampedeResponse>")
            .body_line("return run(request)")
            .doc(["Run!"]);
        assert_eq!(
            render(&m),
            "// Run!\nasync stampede(request: StampedeRequest): Promise<StampedeResponse> {\n  return run(request)\n}\n"
        );
    }

    #[test]
    fn test_plain_method() {
        let m = Method::new("reset");
        assert_eq!(render(&m), "reset() {\n}\n");
    }
}
