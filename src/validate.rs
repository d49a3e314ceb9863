//! Search-term validity predicate.
//!
//! Terms are substituted verbatim into external URL templates, so the
//! accepted alphabet is deliberately narrow: ASCII letters, digits, and
//! single interior hyphens, at most 100 characters.

/// Maximum accepted term length, counted in characters.
pub const MAX_TERM_LEN: usize = 100;

/// Checks a candidate search term against the validity rules.
///
/// Rules are checked in a fixed order and only the first violation is
/// reported: empty, over-long, disallowed characters, leading/trailing
/// hyphen, consecutive hyphens. Pure function, no side effects.
pub fn validate_term(term: &str) -> Result<(), String> {
    if term.is_empty() {
        return Err("search term must not be empty".to_string());
    }
    if term.chars().count() > MAX_TERM_LEN {
        return Err(format!(
            "search term must be at most {} characters",
            MAX_TERM_LEN
        ));
    }
    if let Some(bad) = term.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(format!(
            "search term may only contain letters, digits, and hyphens (found {:?})",
            bad
        ));
    }
    if term.starts_with('-') || term.ends_with('-') {
        return Err("search term must not start or end with a hyphen".to_string());
    }
    if term.contains("--") {
        return Err("search term must not contain consecutive hyphens".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_and_hyphenated_terms() {
        for term in ["Java", "Java-Developer", "C99", "a", "full-stack-dev-2"] {
            assert_eq!(validate_term(term), Ok(()), "expected {:?} to be valid", term);
        }
    }

    #[test]
    fn test_rejects_empty() {
        let err = validate_term("").unwrap_err();
        assert!(err.contains("empty"));
    }

    #[test]
    fn test_length_limit_is_in_characters() {
        let at_limit = "a".repeat(MAX_TERM_LEN);
        assert_eq!(validate_term(&at_limit), Ok(()));

        let over = "a".repeat(MAX_TERM_LEN + 1);
        let err = validate_term(&over).unwrap_err();
        assert!(err.contains("100"));
    }

    #[test]
    fn test_rejects_disallowed_characters() {
        for term in ["two words", "c++", "naïve", "tab\tseparated", "semi;colon"] {
            let err = validate_term(term).unwrap_err();
            assert!(
                err.contains("letters, digits, and hyphens"),
                "wrong reason for {:?}: {}",
                term,
                err
            );
        }
    }

    #[test]
    fn test_rejects_edge_hyphens() {
        for term in ["-Java", "Java-", "-Java-"] {
            let err = validate_term(term).unwrap_err();
            assert!(err.contains("start or end"), "wrong reason for {:?}: {}", term, err);
        }
    }

    #[test]
    fn test_rejects_consecutive_hyphens() {
        let err = validate_term("Bad--Term").unwrap_err();
        assert!(err.contains("consecutive hyphens"));
    }

    #[test]
    fn test_first_violation_wins() {
        // "--" both starts with a hyphen and doubles it; the edge-hyphen rule
        // is checked first.
        let err = validate_term("--").unwrap_err();
        assert!(err.contains("start or end"));

        // A space in an over-long string reports the length first.
        let over = format!("{} {}", "a".repeat(80), "b".repeat(80));
        let err = validate_term(&over).unwrap_err();
        assert!(err.contains("100"));
    }
}
