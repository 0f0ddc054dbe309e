//! Table view invariants
//!
//! Tests cover:
//! - Filter idempotence and filter/sort/selection independence
//! - Sort stability and the toggle state machine
//! - Selection/visibility coupling
//! - Deletion/selection consistency

use crate::record::{Record, RecordId};
use crate::sort::SortDirection;
use crate::table::{Column, TableView};

fn holdings_fixture() -> TableView {
    let columns = vec![
        Column::new("symbol", "Symbol"),
        Column::new("value", "Market Value"),
    ];
    let records = vec![
        Record::new(1u64)
            .with_text("symbol", "AAPL")
            .with_currency("value", "₹18,542.00"),
        Record::new(2u64)
            .with_text("symbol", "MSFT")
            .with_currency("value", "₹20,629.00"),
        Record::new(3u64)
            .with_text("symbol", "GOOGL")
            .with_currency("value", "₹3,571.75"),
    ];
    TableView::new(columns, vec!["symbol"]).with_records(records)
}

fn visible_symbols(view: &TableView) -> Vec<String> {
    view.visible_records()
        .iter()
        .map(|r| r.raw("symbol").unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// FILTERING
// ============================================================================

#[test]
fn test_filter_is_idempotent_at_view_level() {
    let mut view = holdings_fixture();
    view.set_filter("a");
    let once = view.visible_ids();
    // Re-applying the same term must not change the projection
    view.set_filter("a");
    assert_eq!(view.visible_ids(), once);
}

#[test]
fn test_clearing_filter_restores_all_rows() {
    let mut view = holdings_fixture();
    view.set_filter("aapl");
    assert_eq!(view.visible_ids(), vec![RecordId(1)]);
    view.set_filter("");
    assert_eq!(view.visible_ids().len(), 3);
}

// ============================================================================
// SORTING
// ============================================================================

#[test]
fn test_sort_toggle_involution() {
    let mut view = holdings_fixture();

    view.toggle_sort("value");
    assert_eq!(view.sort_state().direction(), SortDirection::Descending);

    view.toggle_sort("value");
    assert_eq!(view.sort_state().direction(), SortDirection::Ascending);

    view.toggle_sort("value");
    view.toggle_sort("value");
    assert_eq!(view.sort_state().direction(), SortDirection::Ascending);
}

#[test]
fn test_sort_stability_preserves_equal_key_order() {
    let columns = vec![Column::new("sector", "Sector")];
    let records = vec![
        Record::new(1u64).with_text("sector", "Tech"),
        Record::new(2u64).with_text("sector", "Energy"),
        Record::new(3u64).with_text("sector", "Tech"),
        Record::new(4u64).with_text("sector", "Tech"),
    ];
    let mut view = TableView::new(columns, vec!["sector"]).with_records(records);

    view.toggle_sort("sector");
    view.toggle_sort("sector"); // ascending
    assert_eq!(
        view.visible_ids(),
        vec![RecordId(2), RecordId(1), RecordId(3), RecordId(4)]
    );

    view.toggle_sort("sector"); // descending
    assert_eq!(
        view.visible_ids(),
        vec![RecordId(1), RecordId(3), RecordId(4), RecordId(2)]
    );
}

#[test]
fn test_end_to_end_sort_then_filter() {
    let mut view = holdings_fixture();

    // First toggle: descending by market value
    view.toggle_sort("value");
    assert_eq!(visible_symbols(&view), vec!["MSFT", "AAPL", "GOOGL"]);

    // Second toggle: ascending
    view.toggle_sort("value");
    assert_eq!(visible_symbols(&view), vec!["GOOGL", "AAPL", "MSFT"]);

    // Substring filter on symbol keeps only AAPL
    view.set_filter("A");
    assert_eq!(visible_symbols(&view), vec!["AAPL"]);
}

#[test]
fn test_sort_on_unknown_field_preserves_order() {
    let mut view = holdings_fixture();
    view.toggle_sort("nonexistent");
    // Every cell is unorderable for the key, so stability keeps order
    assert_eq!(
        view.visible_ids(),
        vec![RecordId(1), RecordId(2), RecordId(3)]
    );
}

// ============================================================================
// SELECTION
// ============================================================================

#[test]
fn test_select_all_only_selects_visible() {
    let mut view = holdings_fixture();
    view.set_filter("g"); // GOOGL only
    view.select_all_visible();

    assert_eq!(view.selected_ids(), vec![RecordId(3)]);

    // Widening the filter does not widen the selection
    view.set_filter("");
    assert_eq!(view.selected_count(), 1);
}

#[test]
fn test_header_checkbox_toggle() {
    let mut view = holdings_fixture();
    view.set_all_visible_selected(true);
    assert_eq!(view.selected_count(), 3);
    view.set_all_visible_selected(false);
    assert_eq!(view.selected_count(), 0);
}

#[test]
fn test_row_checkbox_is_explicit() {
    let mut view = holdings_fixture();
    view.set_row_selected(RecordId(2), true);
    view.set_row_selected(RecordId(2), true);
    assert_eq!(view.selected_count(), 1);
    view.set_row_selected(RecordId(2), false);
    assert!(!view.is_selected(RecordId(2)));
}

// ============================================================================
// DELETION
// ============================================================================

#[test]
fn test_bulk_delete_intersects_selection() {
    let mut view = holdings_fixture();
    view.select_all_visible();
    assert_eq!(view.selected_count(), 3);

    view.bulk_delete(&[RecordId(2)]);

    assert_eq!(view.selected_ids(), vec![RecordId(1), RecordId(3)]);
    assert!(view.records().iter().all(|r| r.id() != RecordId(2)));
}

#[test]
fn test_delete_selected_clears_selection() {
    let mut view = holdings_fixture();
    view.set_filter("aapl");
    view.select_all_visible();
    view.set_filter("");

    let removed = view.delete_selected();
    assert_eq!(removed, 1);
    assert_eq!(view.len(), 2);
    assert_eq!(view.selected_count(), 0);
}

#[test]
fn test_deleting_unknown_ids_is_a_no_op() {
    let mut view = holdings_fixture();
    let removed = view.bulk_delete(&[RecordId(99)]);
    assert_eq!(removed, 0);
    assert_eq!(view.len(), 3);
}
