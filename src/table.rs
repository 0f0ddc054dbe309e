//! Tabular view controller
//!
//! Composes filtering, sorting and selection over an in-memory record
//! collection into the derived projection a table renders. Every
//! operation is synchronous and pure over the owned state; there is no
//! I/O and no user-visible failure path. Used identically for holdings
//! tables, portfolio lists, transaction ledgers and report libraries.

use tracing::debug;

use crate::filter;
use crate::record::{Record, RecordId};
use crate::selection::Selection;
use crate::sort::{self, SortState};

// =============================================================================
// Column Descriptors
// =============================================================================

/// Declarative column descriptor supplied by the caller.
///
/// `sortable` gates the UI affordance only: the controller itself does
/// not reject sort requests for undeclared fields.
#[derive(Debug, Clone)]
pub struct Column {
    pub field: String,
    pub label: String,
    pub sortable: bool,
}

impl Column {
    /// A sortable column.
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            sortable: true,
        }
    }

    /// A display-only column with no sort affordance.
    pub fn unsortable(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            sortable: false,
            ..Self::new(field, label)
        }
    }
}

// =============================================================================
// Table View
// =============================================================================

/// One table's records plus its filter, sort and selection state.
///
/// The visible projection is recomputed on demand from the underlying
/// collection, so mutations never have to patch a cached view.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    records: Vec<Record>,
    columns: Vec<Column>,
    search_fields: Vec<String>,
    filter: String,
    sort: SortState,
    selection: Selection,
}

impl TableView {
    /// Create an empty view with column descriptors and the fields the
    /// free-text filter searches over.
    pub fn new(columns: Vec<Column>, search_fields: Vec<impl Into<String>>) -> Self {
        Self {
            records: Vec::new(),
            columns,
            search_fields: search_fields.into_iter().map(Into::into).collect(),
            filter: String::new(),
            sort: SortState::unsorted(),
            selection: Selection::new(),
        }
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    // =========================================================================
    // Derived Projection
    // =========================================================================

    /// The filtered, sorted projection currently rendered.
    pub fn visible_records(&self) -> Vec<&Record> {
        let mut visible = filter::filter_records(&self.records, &self.filter, &self.search_fields);
        sort::sort_records(&mut visible, &self.sort);
        visible
    }

    /// Identifiers of the visible records, in render order.
    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible_records().iter().map(|r| r.id()).collect()
    }

    // =========================================================================
    // Filter & Sort
    // =========================================================================

    /// Replace the filter term. Sort and selection are untouched.
    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.filter = term.into();
        debug!(filter = %self.filter, "filter updated");
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Header-click sort transition for a field.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn toggle_select(&mut self, id: RecordId) {
        self.selection.toggle(id);
    }

    /// Row checkbox handler: explicit on/off for one id.
    pub fn set_row_selected(&mut self, id: RecordId, selected: bool) {
        if selected {
            self.selection.insert(id);
        } else {
            self.selection.remove(id);
        }
    }

    /// Select exactly the records visible under the active filter.
    /// Records the filter hides are never selected.
    pub fn select_all_visible(&mut self) {
        let visible = self.visible_ids();
        self.selection.select_all(visible);
    }

    /// Header checkbox handler: select all visible, or clear.
    pub fn set_all_visible_selected(&mut self, selected: bool) {
        if selected {
            self.select_all_visible();
        } else {
            self.selection.clear();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.selection.ids().collect()
    }

    // =========================================================================
    // Record Mutation
    // =========================================================================

    /// Replace the whole collection, dropping selections that no longer
    /// resolve to a record.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.prune_selection();
    }

    /// Append a record.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replace the record with the same id. Returns whether a record
    /// was found to replace.
    pub fn replace_record(&mut self, record: Record) -> bool {
        match self.records.iter().position(|r| r.id() == record.id()) {
            Some(index) => {
                self.records[index] = record;
                true
            }
            None => false,
        }
    }

    /// Remove the given records and intersect the selection with the
    /// survivors. Returns how many records were removed.
    pub fn bulk_delete(&mut self, ids: &[RecordId]) -> usize {
        let before = self.records.len();
        self.records.retain(|record| !ids.contains(&record.id()));
        self.prune_selection();
        let removed = before - self.records.len();
        debug!(removed, remaining = self.records.len(), "bulk delete");
        removed
    }

    /// Delete everything currently selected.
    pub fn delete_selected(&mut self) -> usize {
        let selected = self.selected_ids();
        self.bulk_delete(&selected)
    }

    fn prune_selection(&mut self) {
        let surviving: Vec<RecordId> = self.records.iter().map(|r| r.id()).collect();
        self.selection.retain(|id| surviving.contains(&id));
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Fields with a sort affordance, for header rendering.
    pub fn sortable_fields(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.field.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> TableView {
        let columns = vec![
            Column::new("symbol", "Symbol"),
            Column::unsortable("name", "Name"),
            Column::new("value", "Market Value"),
        ];
        let records = vec![
            Record::new(1u64)
                .with_text("symbol", "AAPL")
                .with_text("name", "Apple Inc.")
                .with_currency("value", "₹18,542.00"),
            Record::new(2u64)
                .with_text("symbol", "MSFT")
                .with_text("name", "Microsoft Corp.")
                .with_currency("value", "₹20,629.00"),
            Record::new(3u64)
                .with_text("symbol", "GOOGL")
                .with_text("name", "Alphabet Inc.")
                .with_currency("value", "₹3,571.75"),
        ];
        TableView::new(columns, vec!["symbol", "name"]).with_records(records)
    }

    #[test]
    fn test_unfiltered_unsorted_view_is_insertion_order() {
        let view = sample_view();
        assert_eq!(
            view.visible_ids(),
            vec![RecordId(1), RecordId(2), RecordId(3)]
        );
    }

    #[test]
    fn test_filter_does_not_touch_sort_or_selection() {
        let mut view = sample_view();
        view.toggle_sort("value");
        view.toggle_select(RecordId(1));
        view.set_filter("apple");

        assert_eq!(view.sort_state().key(), Some("value"));
        assert!(view.is_selected(RecordId(1)));
        assert_eq!(view.visible_ids(), vec![RecordId(1)]);
    }

    #[test]
    fn test_select_all_respects_filter() {
        let mut view = sample_view();
        view.set_filter("inc");
        view.select_all_visible();
        assert_eq!(view.selected_count(), 2);
        assert!(view.is_selected(RecordId(1)));
        assert!(!view.is_selected(RecordId(2)));
        assert!(view.is_selected(RecordId(3)));
    }

    #[test]
    fn test_bulk_delete_prunes_selection() {
        let mut view = sample_view();
        view.select_all_visible();
        let removed = view.bulk_delete(&[RecordId(2)]);
        assert_eq!(removed, 1);
        assert_eq!(view.len(), 2);
        assert_eq!(
            view.selected_ids(),
            vec![RecordId(1), RecordId(3)]
        );
    }

    #[test]
    fn test_replace_record() {
        let mut view = sample_view();
        let replaced = view.replace_record(
            Record::new(2u64)
                .with_text("symbol", "MSFT")
                .with_text("name", "Microsoft Corporation")
                .with_currency("value", "₹21,000.00"),
        );
        assert!(replaced);
        assert_eq!(
            view.records()[1].raw("name"),
            Some("Microsoft Corporation")
        );
        assert!(!view.replace_record(Record::new(99u64)));
    }

    #[test]
    fn test_set_records_drops_dangling_selection() {
        let mut view = sample_view();
        view.select_all_visible();
        view.set_records(vec![Record::new(3u64)
            .with_text("symbol", "GOOGL")
            .with_text("name", "Alphabet Inc.")]);
        assert_eq!(view.selected_ids(), vec![RecordId(3)]);
    }

    #[test]
    fn test_sortable_fields() {
        let view = sample_view();
        assert_eq!(
            view.sortable_fields().collect::<Vec<_>>(),
            vec!["symbol", "value"]
        );
    }
}
