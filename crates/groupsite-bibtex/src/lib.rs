//! BibTeX ingestion for the research group site
//!
//! A deliberately lenient reader: it pulls `@kind{id, ...}` blocks out of a
//! bibliography, extracts their fields and authors, and produces sorted
//! [`PublicationRecord`]s. Malformed input is skipped, never reported as an
//! error, so every function here is total over arbitrary text.
//!
//! Features:
//! - Nom-based field extraction with brace-aware values
//! - Author list splitting on the BibTeX `and` separator
//! - Verbatim preservation of each entry's source text

mod authors;
mod fields;
pub mod parser;

pub use authors::parse_authors;
pub use fields::{extract_fields, FieldMap};
pub use parser::{
    parse_bibliography, parse_entry, parse_publications, parse_year, sort_publications,
    ParsedBibliography,
};

pub use groupsite_domain::PublicationRecord;
