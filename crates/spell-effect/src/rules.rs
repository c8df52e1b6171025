//! Ordered first-match rule tables.
//!
//! Each decision point of the classifier is a slice of rules evaluated top
//! to bottom; the first rule whose predicate holds decides the result.

/// A single `(predicate, result)` pair
pub struct Rule<I: ?Sized, T> {
    pub outcome: T,
    pub test: fn(&I) -> bool,
}

/// Result of the first rule that matches `input`
pub fn first_match<I: ?Sized, T: Copy>(rules: &[Rule<I, T>], input: &I) -> Option<T> {
    rules
        .iter()
        .find(|rule| (rule.test)(input))
        .map(|rule| rule.outcome)
}

/// First `(needle, value)` entry whose needle occurs in `haystack`
pub fn first_keyword<T: Copy>(table: &[(&str, T)], haystack: &str) -> Option<T> {
    table
        .iter()
        .find(|(needle, _)| haystack.contains(needle))
        .map(|(_, value)| *value)
}

pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[Rule<str, u8>] = &[
        Rule {
            outcome: 1,
            test: |s| s.contains("alpha"),
        },
        Rule {
            outcome: 2,
            test: |s| s.contains("beta"),
        },
    ];

    #[test]
    fn test_first_match_respects_order() {
        assert_eq!(first_match(RULES, "beta alpha"), Some(1));
        assert_eq!(first_match(RULES, "beta"), Some(2));
        assert_eq!(first_match(RULES, "gamma"), None);
    }

    #[test]
    fn test_first_keyword_uses_table_order() {
        let table = [("one", 1), ("two", 2)];
        assert_eq!(first_keyword(&table, "two and one"), Some(1));
        assert_eq!(first_keyword(&table, "none"), Some(1));
        assert_eq!(first_keyword(&table, "three"), None);
    }
}
