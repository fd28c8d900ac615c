//! Author list parsing

use lazy_static::lazy_static;
use regex::Regex;

use crate::fields::collapse_whitespace;

lazy_static! {
    /// BibTeX author separator: `and` with whitespace on both sides, any case
    static ref AUTHOR_SEPARATOR: Regex = Regex::new(r"(?i)\s+and\s+").unwrap();
}

/// Split a BibTeX author field into individual names, in source order.
///
/// Names keep their source form ("Smith, John" stays as written); only
/// whitespace is normalized. Empty segments are dropped.
pub fn parse_authors(author_field: &str) -> Vec<String> {
    if author_field.is_empty() {
        return Vec::new();
    }

    AUTHOR_SEPARATOR
        .split(author_field)
        .map(collapse_whitespace)
        .filter(|author| !author.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A and B and C", vec!["A", "B", "C"])]
    #[case("Anderson", vec!["Anderson"])]
    #[case("", vec![])]
    #[case("John Smith AND Ann Lee", vec!["John Smith", "Ann Lee"])]
    #[case("Smith, John and\n    Lee, Ann", vec!["Smith, John", "Lee, Ann"])]
    #[case("Sandy Brandon and Andy Andrews", vec!["Sandy Brandon", "Andy Andrews"])]
    #[case("  and Ann Lee and ", vec!["Ann Lee"])]
    #[case("A  and  and B", vec!["A", "and B"])]
    fn test_parse_authors(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_authors(input), expected);
    }

    #[test]
    fn test_no_split_without_surrounding_whitespace() {
        assert_eq!(parse_authors("Rock-and-Roll Band"), vec!["Rock-and-Roll Band"]);
        assert_eq!(parse_authors("A and,B"), vec!["A and,B"]);
    }
}
