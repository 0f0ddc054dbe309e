//! Column sorting
//!
//! Key-based comparison over normalized cell values plus the header-click
//! state machine: clicking the active column flips direction, clicking a
//! new column selects it descending. Sorting is stable, so equal keys keep
//! their original relative order.

use std::cmp::Ordering;

use tracing::debug;

use crate::record::Record;
use crate::value::CellValue;

// =============================================================================
// Sort Direction
// =============================================================================

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn opposite(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

// =============================================================================
// Sort State
// =============================================================================

/// Active sort key and direction for one view.
///
/// No key means insertion order is preserved.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Whether the given field is the active sort key.
    pub fn is_active(&self, field: &str) -> bool {
        self.key.as_deref() == Some(field)
    }

    /// Header-click transition: same key flips direction, a new key is
    /// selected at the default (descending) direction.
    pub fn toggle(&mut self, field: &str) {
        if self.is_active(field) {
            self.direction = self.direction.opposite();
        } else {
            self.key = Some(field.to_string());
            self.direction = SortDirection::default();
        }
        debug!(key = field, direction = self.direction.as_str(), "sort toggled");
    }
}

// =============================================================================
// Comparison
// =============================================================================

/// Compare two normalized values under a direction.
///
/// Two numbers compare numerically; any text involvement falls back to
/// string comparison of the coerced values. Unorderable values sort after
/// every orderable value regardless of direction, so direction negation
/// is applied only to the orderable pairs.
pub fn compare_values(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a, b) {
        (CellValue::Unorderable, CellValue::Unorderable) => Ordering::Equal,
        (CellValue::Unorderable, _) => Ordering::Greater,
        (_, CellValue::Unorderable) => Ordering::Less,
        (CellValue::Number(x), CellValue::Number(y)) => {
            direction.apply(x.partial_cmp(y).unwrap_or(Ordering::Equal))
        }
        _ => direction.apply(compare_as_strings(a, b)),
    }
}

/// Case-insensitive comparison with a raw tiebreak, approximating the
/// locale-aware comparison of the observed behavior.
fn compare_as_strings(a: &CellValue, b: &CellValue) -> Ordering {
    let a = a.coerce_to_string();
    let b = b.coerce_to_string();
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(&b))
}

/// Stable-sort a projection of records by the active key.
///
/// `slice::sort_by` is stable, so records with equal keys keep their
/// relative order in both directions.
pub fn sort_records(records: &mut [&Record], state: &SortState) {
    let Some(key) = state.key() else {
        return;
    };
    let direction = state.direction();
    records.sort_by(|a, b| compare_values(a.sort_value(key), b.sort_value(key), direction));
}

// =============================================================================
// Tests
// =============================================================================
