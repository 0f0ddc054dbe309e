//! Free-text record filtering
//!
//! Case-insensitive substring match over the raw display strings of the
//! fields a view declares searchable. An empty term matches everything.
//!
//! Lowercasing is the simple per-character kind; full Unicode case folding
//! is a known limitation carried over from the observed behavior.

use crate::record::Record;

/// Whether a record matches a search term on any of the given fields.
pub fn matches<S: AsRef<str>>(record: &Record, term: &str, fields: &[S]) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    fields.iter().any(|field| {
        record
            .raw(field.as_ref())
            .map(|raw| raw.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

/// Filter a collection down to the matching records, preserving order.
pub fn filter_records<'a, S: AsRef<str>>(
    records: &'a [Record],
    term: &str,
    fields: &[S],
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches(record, term, fields))
        .collect()
}
