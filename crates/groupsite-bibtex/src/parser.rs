//! Entry scanning and record building
//!
//! An entry is `@kind{id, body}`:
//! - `kind` is a bare word directly followed by `{`
//! - `id` is everything up to the first comma, and never reaches into the
//!   next entry's `@`
//! - `body` runs to the last `}` before the next `@` (or end of text)
//!
//! Text that does not form an entry is skipped and scanning resumes at the
//! next `@`.

use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::char,
    IResult,
};

use groupsite_domain::PublicationRecord;

use crate::authors::parse_authors;
use crate::fields::{extract_fields, is_word_char, FieldMap};

/// Fields consulted, in order, for a record's venue
const VENUE_FIELDS: [&str; 3] = ["journal", "booktitle", "howpublished"];

/// Result of scanning a bibliography
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedBibliography {
    /// Records sorted newest first, unknown years last
    pub records: Vec<PublicationRecord>,
    /// Number of `@` markers that did not start a well-formed entry
    pub skipped: usize,
}

/// A matched entry block, borrowed from the source text
struct EntryBlock<'a> {
    kind: &'a str,
    id: &'a str,
    body: &'a str,
    raw: &'a str,
}

/// Parse a bibliography into sorted publication records
pub fn parse_publications(input: &str) -> Vec<PublicationRecord> {
    parse_bibliography(input).records
}

/// Parse a bibliography, also reporting how much input was skipped
pub fn parse_bibliography(input: &str) -> ParsedBibliography {
    let mut records = Vec::new();
    let mut skipped = 0;
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find('@') {
        let start = cursor + offset;
        match match_entry(&input[start..]) {
            Some(block) => {
                records.push(build_record(&block));
                cursor = start + block.raw.len();
            }
            None => {
                tracing::trace!(offset = start, "skipping malformed entry");
                skipped += 1;
                cursor = start + 1;
            }
        }
    }

    sort_publications(&mut records);

    tracing::debug!(
        entries = records.len(),
        skipped,
        "parsed bibliography"
    );

    ParsedBibliography { records, skipped }
}

/// Parse the first entry in `input`, e.g. a record's own `raw_source`
pub fn parse_entry(input: &str) -> Option<PublicationRecord> {
    let mut cursor = 0;
    while let Some(offset) = input[cursor..].find('@') {
        let start = cursor + offset;
        if let Some(block) = match_entry(&input[start..]) {
            return Some(build_record(&block));
        }
        cursor = start + 1;
    }
    None
}

/// Sort records by year, newest first.
///
/// Unknown years (0) go last. Equal years are ordered by id, then by their
/// original position, so the result is deterministic.
pub fn sort_publications(records: &mut [PublicationRecord]) {
    records.sort_by(|a, b| {
        (a.year == 0)
            .cmp(&(b.year == 0))
            .then_with(|| b.year.cmp(&a.year))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Parse a year the lenient way: a leading, optionally signed integer.
///
/// Anything without leading digits, or out of range, is 0 (unknown).
pub fn parse_year(value: &str) -> i32 {
    let value = value.trim_start();
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..digits_len].parse::<i32>() {
        Ok(year) if negative => -year,
        Ok(year) => year,
        Err(_) => 0,
    }
}

/// Match an entry block at the start of `input` (which begins with `@`)
fn match_entry(input: &str) -> Option<EntryBlock<'_>> {
    let (rest, (kind, id)) = entry_header(input).ok()?;

    let span_end = rest.find('@').unwrap_or(rest.len());
    let close = rest[..span_end].rfind('}')?;
    if close == 0 {
        return None;
    }

    let header_len = input.len() - rest.len();
    Some(EntryBlock {
        kind,
        id,
        body: &rest[..close],
        raw: &input[..header_len + close + 1],
    })
}

/// Parse `@kind{id,`
fn entry_header(input: &str) -> IResult<&str, (&str, &str)> {
    let (rest, _) = char('@')(input)?;
    let (rest, kind) = take_while1(is_word_char)(rest)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, id) = take_till1(|c: char| c == ',' || c == '@')(rest)?;
    let (rest, _) = char(',')(rest)?;

    Ok((rest, (kind, id)))
}

fn build_record(block: &EntryBlock<'_>) -> PublicationRecord {
    let fields = extract_fields(block.body);

    let mut record = PublicationRecord::new(block.id.trim(), block.kind.to_lowercase());
    record.title = fields.get("title").cloned().unwrap_or_default();
    record.authors = parse_authors(fields.get("author").map(String::as_str).unwrap_or(""));
    record.year = fields.get("year").map(String::as_str).map_or(0, parse_year);
    record.venue = VENUE_FIELDS
        .iter()
        .find_map(|name| non_empty(&fields, name))
        .unwrap_or_default();
    record.subtitle = non_empty(&fields, "subtitle");
    record.url = non_empty(&fields, "url");
    record.doi = non_empty(&fields, "doi");
    record.raw_source = block.raw.to_string();
    record
}

fn non_empty(fields: &FieldMap, name: &str) -> Option<String> {
    fields.get(name).filter(|value| !value.is_empty()).cloned()
}
