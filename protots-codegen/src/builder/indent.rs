/// Whitespace written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces. Widths above eight are clamped.
    Spaces(u8),
    Tab,
}

const SPACES: &str = "        ";

impl Indent {
    /// Two spaces, the width every generated `.ts` file uses.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Tab => "\t",
            Self::Spaces(width) => &SPACES[..usize::from(width).min(SPACES.len())],
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(Indent::TYPESCRIPT.as_str(), "  ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(0).as_str(), "");
        assert_eq!(Indent::Spaces(40).as_str(), SPACES);
        assert_eq!(Indent::Tab.as_str(), "\t");
    }
}
