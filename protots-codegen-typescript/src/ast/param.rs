//! Function and constructor parameters.

/// A parameter such as `period: Period` or `name: string = "rex"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn render(&self) -> String {
        match &self.default {
            Some(value) => format!("{}: {} = {}", self.name, self.ty, value),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// Join parameters for a single-line signature.
pub fn join_params(params: &[Param]) -> String {
    params
        .iter()
        .map(Param::render)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(Param::new("period", "Period").render(), "period: Period");
        assert_eq!(
            Param::new("name", "string").default_value("\"rex\"").render(),
            "name: string = \"rex\""
        );
    }

    #[test]
    fn test_join_params() {
        let params = [Param::new("a", "number"), Param::new("b", "string")];
        assert_eq!(join_params(&params), "a: number, b: string");
        assert_eq!(join_params(&[]), "");
    }
}
