//! Query normalization.
//!
//! Raw input lines are normalized once, before template matching:
//! templates are written in lowercase and never contain punctuation,
//! so the matcher itself stays case-sensitive and exact.

/// Lowercase an input line and split it into tokens.
///
/// Trailing question marks are stripped before tokenizing, so
/// `"Top speed of the Urus?"` and `"top speed of the urus"` produce
/// the same query.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .trim()
        .trim_end_matches('?')
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Top Speed of the Urus"),
            vec!["top", "speed", "of", "the", "urus"]
        );
    }

    #[test]
    fn test_tokenize_strips_trailing_question_mark() {
        assert_eq!(tokenize("urus top speed?"), vec!["urus", "top", "speed"]);
        assert_eq!(tokenize("why??"), vec!["why"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  engine   of  miura "), vec!["engine", "of", "miura"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("?").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_interior_punctuation() {
        // Only the trailing question mark is special; model names like
        // "350 km/h" style tokens pass through untouched.
        assert_eq!(tokenize("Huracán EVO"), vec!["huracán", "evo"]);
    }
}
