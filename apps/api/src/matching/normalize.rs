//! Record normalizer — raw delimited spreadsheet cells into clean token lists.

/// Splits a raw skills/degrees cell on `,` `;` or `|`, trims each piece and
/// drops empties. Order of first appearance is preserved. Total function:
/// empty input yields an empty vec, never an error.
pub fn normalize_tokens(raw: &str) -> Vec<String> {
    raw.split([',', ';', '|'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical form of a country name for compatibility checks.
/// US spelling variants collapse to "usa"; everything else is only
/// lowercased and trimmed.
pub fn canonical_country(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    match lower.as_str() {
        "united states" | "united states of america" | "usa" | "u.s.a." => "usa".to_string(),
        _ => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_splits_on_all_three_delimiters() {
        assert_eq!(
            normalize_tokens("Python,SQL;Rust|Go"),
            vec!["Python", "SQL", "Rust", "Go"]
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_tokens("  Python , SQL ;  Rust "),
            vec!["Python", "SQL", "Rust"]
        );
    }

    #[test]
    fn test_normalize_drops_empty_pieces() {
        assert_eq!(normalize_tokens("Python,,; |SQL"), vec!["Python", "SQL"]);
        assert!(normalize_tokens("Python, ,").iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_normalize_empty_input_yields_empty_vec() {
        assert!(normalize_tokens("").is_empty());
        assert!(normalize_tokens("   ").is_empty());
    }

    #[test]
    fn test_normalize_delimiter_choice_does_not_change_order() {
        assert_eq!(normalize_tokens("a,b,c"), normalize_tokens("a;b|c"));
    }

    #[test]
    fn test_canonical_country_us_variants_collapse() {
        assert_eq!(canonical_country("USA"), "usa");
        assert_eq!(canonical_country("United States"), "usa");
        assert_eq!(canonical_country("United States of America"), "usa");
        assert_eq!(canonical_country(" u.s.a. "), "usa");
    }

    #[test]
    fn test_canonical_country_other_names_lowercased_only() {
        assert_eq!(canonical_country(" India "), "india");
        assert_eq!(canonical_country("France"), "france");
    }
}
