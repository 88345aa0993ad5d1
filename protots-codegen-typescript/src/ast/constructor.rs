//! Class constructors.

use protots_codegen::builder::{CodeFragment, Renderable};

use super::{Param, param::join_params};

/// A class constructor.
///
/// Positional parameters are assigned to identically named members. When a
/// configurator is enabled, a trailing `configure` callback receives the new
/// instance so callers can set the remaining members.
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    params: Vec<Param>,
    configure: Option<String>,
    multiline: bool,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a positional parameter assigned to the member of the same name.
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a trailing `configure` callback taking an instance of `class_name`.
    pub fn configure(mut self, class_name: impl Into<String>) -> Self {
        self.configure = Some(class_name.into());
        self
    }

    /// Put every positional parameter on its own line.
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    fn signature_params(&self) -> Vec<Param> {
        let mut params = self.params.clone();
        if let Some(class_name) = &self.configure {
            params.push(
                Param::new("configure", format!("((o: {}) => void) | undefined", class_name))
                    .default_value("undefined"),
            );
        }
        params
    }

    fn body(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .params
            .iter()
            .map(|p| CodeFragment::line(format!("this.{} = {}", p.name, p.name)))
            .collect();
        if self.configure.is_some() {
            body.push(CodeFragment::line("configure?.call(this, this)"));
        }
        body
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let params = self.signature_params();
        if self.multiline && !self.params.is_empty() {
            let last = params.len() - 1;
            let param_lines = params
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let separator = if i < last { "," } else { "" };
                    CodeFragment::line(format!("{}{}", p.render(), separator))
                })
                .collect();
            vec![
                CodeFragment::line("constructor("),
                CodeFragment::indent(param_lines),
                CodeFragment::block(") {", self.body(), Some("}".to_string())),
            ]
        } else {
            vec![CodeFragment::block(
                format!("constructor({}) {{", join_params(&params)),
                self.body(),
                Some("}".to_string()),
            )]
        }
    }
}
