//! Tabular records
//!
//! A record is one row of tabular data: a unique, stable identifier plus
//! an insertion-ordered map of field name to cell. Field names are declared
//! by the caller; no fixed schema is enforced beyond the identifier.

use std::fmt;

use indexmap::IndexMap;

use crate::value::{Cell, CellValue};

// =============================================================================
// Record Identifier
// =============================================================================

/// Unique, stable record identifier.
///
/// Identifiers are unique across a collection and never reused after
/// deletion within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Record
// =============================================================================

/// One row of tabular data.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    cells: IndexMap<String, Cell>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            cells: IndexMap::new(),
        }
    }

    /// Attach a cell under a field name, replacing any previous cell.
    pub fn with_cell(mut self, field: impl Into<String>, cell: Cell) -> Self {
        self.cells.insert(field.into(), cell);
        self
    }

    pub fn with_text(self, field: impl Into<String>, raw: impl Into<String>) -> Self {
        self.with_cell(field, Cell::text(raw))
    }

    pub fn with_number(self, field: impl Into<String>, n: f64) -> Self {
        self.with_cell(field, Cell::number(n))
    }

    pub fn with_currency(self, field: impl Into<String>, display: impl Into<String>) -> Self {
        self.with_cell(field, Cell::currency(display))
    }

    pub fn with_percent(self, field: impl Into<String>, display: impl Into<String>) -> Self {
        self.with_cell(field, Cell::percent(display))
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn cell(&self, field: &str) -> Option<&Cell> {
        self.cells.get(field)
    }

    /// The raw display string for a field, if present.
    pub fn raw(&self, field: &str) -> Option<&str> {
        self.cells.get(field).map(Cell::raw)
    }

    /// The normalized value used for ordering. Missing fields are
    /// unorderable, so records lacking a sort key keep their position.
    pub fn sort_value(&self, field: &str) -> &CellValue {
        static UNORDERABLE: CellValue = CellValue::Unorderable;
        self.cells
            .get(field)
            .map(Cell::value)
            .unwrap_or(&UNORDERABLE)
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = Record::new(1u64)
            .with_text("symbol", "AAPL")
            .with_currency("value", "₹18,542.00");

        assert_eq!(record.id(), RecordId(1));
        assert_eq!(record.raw("symbol"), Some("AAPL"));
        assert_eq!(record.sort_value("value").as_number(), Some(18542.0));
        assert_eq!(record.fields().collect::<Vec<_>>(), vec!["symbol", "value"]);
    }

    #[test]
    fn test_missing_field_is_unorderable() {
        let record = Record::new(1u64).with_text("symbol", "AAPL");
        assert!(record.sort_value("value").is_unorderable());
        assert_eq!(record.raw("value"), None);
    }
}
