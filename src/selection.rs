//! Row selection
//!
//! Tracks which record identifiers are marked for bulk action. The set
//! itself is dumb: keeping it consistent with the underlying collection
//! after deletions is the view controller's job.

use indexmap::IndexSet;

use crate::record::RecordId;

/// The set of currently selected record identifiers.
///
/// Iteration follows selection order, so bulk actions see a
/// deterministic sequence.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: IndexSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present. Returns whether the
    /// id is selected afterwards.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn insert(&mut self, id: RecordId) {
        self.ids.insert(id);
    }

    pub fn remove(&mut self, id: RecordId) {
        self.ids.shift_remove(&id);
    }

    /// Replace the selection with exactly the given identifiers.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop every id the predicate rejects. Used to intersect the
    /// selection with the identifiers surviving a deletion.
    pub fn retain(&mut self, keep: impl Fn(RecordId) -> bool) {
        self.ids.retain(|id| keep(*id));
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle(RecordId(1)));
        assert!(selection.is_selected(RecordId(1)));
        assert!(!selection.toggle(RecordId(1)));
        assert!(!selection.is_selected(RecordId(1)));
    }

    #[test]
    fn test_select_all_replaces() {
        let mut selection = Selection::new();
        selection.insert(RecordId(9));
        selection.select_all([RecordId(1), RecordId(2)]);
        assert_eq!(selection.count(), 2);
        assert!(!selection.is_selected(RecordId(9)));
    }

    #[test]
    fn test_retain_intersects() {
        let mut selection = Selection::new();
        selection.select_all([RecordId(1), RecordId(2), RecordId(3)]);
        selection.retain(|id| id != RecordId(2));
        assert_eq!(
            selection.ids().collect::<Vec<_>>(),
            vec![RecordId(1), RecordId(3)]
        );
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.select_all([RecordId(1), RecordId(2)]);
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.count(), 0);
    }
}
