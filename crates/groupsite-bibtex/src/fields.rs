//! Field extraction from an entry body
//!
//! Recognizes `name = {value}` and `name = "value"` anywhere in the body.
//! Anything that does not fit that shape is skipped.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    error::{Error, ErrorKind},
    IResult,
};
use std::collections::HashMap;

/// Lowercase field name to whitespace-normalized value
pub type FieldMap = HashMap<String, String>;

/// Extract every `name = value` pair from an entry body.
///
/// Field names are matched case-insensitively and stored lowercased. A later
/// occurrence of the same name replaces an earlier one.
pub fn extract_fields(body: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    let mut remaining = body;

    while let Some(c) = remaining.chars().next() {
        if !is_word_char(c) {
            remaining = &remaining[c.len_utf8()..];
            continue;
        }

        match parse_field(remaining) {
            Ok((rest, (key, value))) => {
                fields.insert(key, value);
                remaining = rest;
            }
            Err(_) => {
                // Every suffix of this word would fail the same way
                let word_len = remaining
                    .find(|c: char| !is_word_char(c))
                    .unwrap_or(remaining.len());
                remaining = &remaining[word_len..];
            }
        }
    }

    fields
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Collapse whitespace runs (including newlines) to one space and trim
pub(crate) fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a single field (key = value)
fn parse_field(input: &str) -> IResult<&str, (String, String)> {
    let (rest, key) = take_while1(is_word_char)(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, value) = alt((parse_braced_value, parse_quoted_value))(rest)?;

    Ok((rest, (key.to_lowercase(), collapse_whitespace(value))))
}

/// Parse a braced value {content}, keeping inner braces literally
fn parse_braced_value(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('{') {
        return Err(fail(input));
    }

    let mut depth = 0usize;
    for (pos, byte) in input.bytes().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let inner = &input[1..pos];
                    if inner.is_empty() {
                        return Err(fail(input));
                    }
                    return Ok((&input[pos + 1..], inner));
                }
            }
            _ => {}
        }
    }

    Err(fail(input))
}

/// Parse a quoted value "content"; quotes inside braces do not terminate it
fn parse_quoted_value(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('"') {
        return Err(fail(input));
    }

    let mut depth = 0usize;
    for (pos, byte) in input.bytes().enumerate().skip(1) {
        match byte {
            b'"' if depth == 0 => {
                let inner = &input[1..pos];
                if inner.is_empty() {
                    return Err(fail(input));
                }
                return Ok((&input[pos + 1..], inner));
            }
            b'{' => depth += 1,
            b'}' => {
                if depth == 0 {
                    return Err(fail(input));
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    Err(fail(input))
}

fn fail(input: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(input, ErrorKind::Char))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_braced_and_quoted_values() {
        let fields = extract_fields(
            r#"
    author = {John Smith},
    Title = "A Great Paper",
    year = {2024},
"#,
        );
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["author"], "John Smith");
        assert_eq!(fields["title"], "A Great Paper");
        assert_eq!(fields["year"], "2024");
    }

    #[test]
    fn test_one_level_of_nesting_is_literal() {
        let fields = extract_fields("title = {Title with {Capitalized} Words}");
        assert_eq!(fields["title"], "Title with {Capitalized} Words");
    }

    #[test]
    fn test_leading_nested_group() {
        let fields = extract_fields("title = {{GPU} Kernels}");
        assert_eq!(fields["title"], "{GPU} Kernels");
    }

    #[test]
    fn test_deep_nesting_is_best_effort() {
        let fields = extract_fields("title = {A {{B {C}}} D}, year = {2020}");
        assert_eq!(fields["title"], "A {{B {C}}} D");
        assert_eq!(fields["year"], "2020");
    }

    #[test]
    fn test_whitespace_collapses() {
        let fields = extract_fields("title = {  A\n      Multi-line \t Title  }");
        assert_eq!(fields["title"], "A Multi-line Title");
    }

    #[test]
    fn test_later_occurrence_wins() {
        let fields = extract_fields("note = {first}, NOTE = {second}");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["note"], "second");
    }

    #[test]
    fn test_malformed_fragments_are_skipped() {
        let fields = extract_fields(
            "title = {Unclosed, year = 2020, month = jan, empty = {}, doi = {10.1/x}",
        );
        // Bare values are not recognized; the unclosed title is dropped
        assert_eq!(fields.get("year"), None);
        assert_eq!(fields.get("month"), None);
        assert_eq!(fields.get("empty"), None);
        assert_eq!(fields.get("title"), None);
        assert_eq!(fields["doi"], "10.1/x");
    }

    #[test]
    fn test_skips_noise_between_fields() {
        let fields = extract_fields("%% comment ## title = {T} ;; url = \"https://x.org\"");
        assert_eq!(fields["title"], "T");
        assert_eq!(fields["url"], "https://x.org");
    }

    #[test]
    fn test_quotes_inside_braced_value() {
        let fields = extract_fields(r#"title = {He said "hi"}"#);
        assert_eq!(fields["title"], r#"He said "hi""#);
    }

    #[test]
    fn test_mismatched_delimiters_are_rejected() {
        let fields = extract_fields(r#"title = "Mismatched}"#);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_non_ascii_text() {
        let fields = extract_fields("author = {Jürgen Müller and Zoë Ñandú}");
        assert_eq!(fields["author"], "Jürgen Müller and Zoë Ñandú");
    }

    proptest! {
        #[test]
        fn extraction_is_idempotent(body in "[a-z]{1,8} = \\{[a-zA-Z {}]{0,20}\\}, ?[a-z =\"{},]{0,30}") {
            prop_assert_eq!(extract_fields(&body), extract_fields(&body));
        }

        #[test]
        fn extraction_never_panics(body in "\\PC{0,200}") {
            let _ = extract_fields(&body);
        }
    }
}
