//! Shared utility functions for code generation.

/// Kebab-case as the generated clients' servers route it: the first
/// character is lower-cased and every later upper-case character becomes
/// `-` plus its lower-case form. Everything else is kept, so acronyms split
/// per letter (`GetURL` -> `get-u-r-l`) and underscores survive.
pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (index, c) in s.chars().enumerate() {
        if index > 0 && c.is_uppercase() {
            out.push('-');
        }
        if index == 0 || c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Lower-case the first character (e.g., "Stampede" -> "stampede")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Split schema documentation into comment lines.
///
/// Trailing whitespace is trimmed from every line and blank lines at the
/// start and end are dropped. Empty documentation yields no lines.
pub fn doc_lines(doc: &str) -> Vec<&str> {
    let lines: Vec<&str> = doc.lines().map(str::trim_end).collect();
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].to_vec(),
        _ => Vec::new(),
    }
}

/// Wrap a value in double quotes unless it is already a quoted literal.
pub fn quote_string(value: &str) -> String {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Stampede"), "stampede");
        assert_eq!(to_kebab_case("StampedeHerd"), "stampede-herd");
        assert_eq!(to_kebab_case("Dinosaurs"), "dinosaurs");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_kebab_case_keeps_acronyms_and_underscores_apart() {
        assert_eq!(to_kebab_case("GetURL"), "get-u-r-l");
        assert_eq!(to_kebab_case("HTTP"), "h-t-t-p");
        assert_eq!(to_kebab_case("list_items"), "list_items");
        assert_eq!(to_kebab_case("Fetch2Bones"), "fetch2-bones");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Stampede"), "stampede");
        assert_eq!(lower_first("GetHerd"), "getHerd");
        assert_eq!(lower_first("x"), "x");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_doc_lines() {
        assert_eq!(doc_lines(""), Vec::<&str>::new());
        assert_eq!(doc_lines("\n  \n"), Vec::<&str>::new());
        assert_eq!(
            doc_lines("\nA large lizard.  \n\nExtinct.\n"),
            vec!["A large lizard.", "", "Extinct."]
        );
    }

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("rex"), "\"rex\"");
        assert_eq!(quote_string("\"rex\""), "\"rex\"");
        assert_eq!(quote_string("'rex'"), "'rex'");
        assert_eq!(quote_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_string("\""), "\"\\\"\"");
    }
}
