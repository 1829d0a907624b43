/// Lab-number prefix for a sample, chosen from its `SOURCE` value.
///
/// Matching is a case-insensitive substring test and the first rule wins:
/// `GRAB` gives `G-`, then `BMFS` gives `BMFS-`. Anything else, including an
/// absent source, gets no prefix.
pub fn prefix_for(source: Option<&str>) -> &'static str {
    let Some(source) = source else {
        return "";
    };
    let upper = source.to_uppercase();
    if upper.contains("GRAB") {
        "G-"
    } else if upper.contains("BMFS") {
        "BMFS-"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_for() {
        assert_eq!(prefix_for(Some("Grab sample 12")), "G-");
        assert_eq!(prefix_for(Some("bmfs-lab")), "BMFS-");
        assert_eq!(prefix_for(Some("other")), "");
        assert_eq!(prefix_for(None), "");
        assert_eq!(prefix_for(Some("")), "");
    }

    #[test]
    fn test_grab_checked_before_bmfs() {
        assert_eq!(prefix_for(Some("BMFS grab")), "G-");
        assert_eq!(prefix_for(Some("  regrabbed ")), "G-");
    }
}
