/// Canonical column name: line breaks become spaces, outer whitespace is
/// stripped, and the result is uppercased.
pub fn canonical_header(raw: &str) -> String {
    raw.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_uppercase()
}

/// Trim whitespace from a cell before it goes into the template.
pub fn clean_str(raw: &str) -> &str {
    raw.trim()
}

/// Single-line rendering of a cell, for previews.
pub fn flatten_cell(raw: &str) -> String {
    raw.replace("\r\n", " ").replace(['\n', '\r', '\t'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_header() {
        assert_eq!(canonical_header("  site name "), "SITE NAME");
        assert_eq!(canonical_header("SITE\nNAME"), "SITE NAME");
        assert_eq!(canonical_header("date\r\ncollection"), "DATE COLLECTION");
        assert_eq!(canonical_header("\nLabNo\n"), "LABNO");
        // inner spacing is left alone
        assert_eq!(canonical_header("SITE  NAME"), "SITE  NAME");
    }

    #[test]
    fn test_flatten_cell() {
        assert_eq!(flatten_cell("a\nb\r\nc"), "a b c");
        assert_eq!(clean_str("  LN100 \t"), "LN100");
    }
}
