//! Tolerant AIS vessel list parser.
//!
//! Accepts whatever an analyst uploads next to the imagery: a CSV or TSV
//! export with a header row, or free-form notes with one vessel per line. The
//! parser is total. Undecodable bytes are dropped, malformed rows are skipped,
//! and the worst case is an empty list.
//!
//! - Headered input (first line mentions `mmsi`, `name`, `vessel`,
//!   `latitude` or `longitude`): columns are located by the rule table in
//!   [`header`] and every row is rendered as
//!   `"<name | MMSI n>[ (<type>)][ at <lat>,<lon>]"`.
//! - Anything else: each non-blank line is returned verbatim (trimmed).

pub mod header;
pub mod record;


pub use header::{is_header, Delimiter, FieldIndexMap, FieldSlot};
pub use record::VesselRecord;

use log::debug;

/// Parse an uploaded vessel file into human-readable descriptions.
pub fn parse_vessel_records(raw: &[u8]) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let text = decode_lossy(raw);
    let lines = non_blank_lines(&text);
    let Some((&first, rows)) = lines.split_first() else {
        return Vec::new();
    };

    if !is_header(first) {
        debug!("AIS: no header detected, keeping {} raw lines", lines.len());
        return lines.iter().map(|line| line.to_string()).collect();
    }

    let delimiter = Delimiter::detect(first);
    let fields = FieldIndexMap::from_header(first, delimiter);
    debug!(
        "AIS: header with {:?} delimiter, columns {:?}",
        delimiter, fields
    );

    let vessels: Vec<String> = rows
        .iter()
        .filter_map(|line| VesselRecord::from_row(line, delimiter, &fields))
        .filter_map(|record| record.describe())
        .collect();
    debug!("AIS: {} of {} rows described", vessels.len(), rows.len());
    vessels
}

/// UTF-8 decode that silently drops invalid byte sequences.
fn decode_lossy(raw: &[u8]) -> String {
    let mut text = String::with_capacity(raw.len());
    for chunk in raw.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

#[inline]
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Trimmed, non-blank lines in input order.
fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
