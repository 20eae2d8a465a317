//! Table store and selection
//!
//! Holds the fetched table list plus the "currently selected" pointer. The
//! pointer is non-owning: it refers to a table by id and is reconciled
//! whenever the list is replaced by a refresh.

use shared::models::{Table, TableAction, TableStatus};

/// Fetched tables plus the single selection pointer
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    tables: Vec<Table>,
    selected: Option<String>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table list with a fresh server response
    ///
    /// Clears the selection if the selected table no longer exists.
    pub fn replace(&mut self, tables: Vec<Table>) {
        self.tables = tables;
        if let Some(id) = &self.selected {
            if !self.tables.iter().any(|t| &t.id == id) {
                self.selected = None;
            }
        }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Select a table, replacing any previous selection
    ///
    /// Returns false (leaving the selection unchanged) when the id does not
    /// match a fetched table, so the pointer can never dangle.
    pub fn select(&mut self, id: &str) -> bool {
        if self.tables.iter().any(|t| t.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Explicitly clear the selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_table(&self) -> Option<&Table> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Actions offered for the selected table (empty without a selection)
    ///
    /// Pure display rule over [`TableStatus::actions`]; a stale status is
    /// not prevented here, the backend rejects inconsistent actions and the
    /// client re-fetches.
    pub fn selected_actions(&self) -> &'static [TableAction] {
        match self.selected_table() {
            Some(table) => table.status.actions(),
            None => &[],
        }
    }

    /// Tables in a given status (for the floor board counters)
    pub fn with_status(&self, status: TableStatus) -> impl Iterator<Item = &Table> {
        self.tables.iter().filter(move |t| t.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TableSize;

    fn table(id: &str, status: TableStatus) -> Table {
        Table {
            id: id.to_string(),
            number: 1,
            status,
            size: TableSize::Medium,
            floor: 1,
            active_order: None,
        }
    }

    fn store() -> TableStore {
        let mut store = TableStore::new();
        store.replace(vec![
            table("t1", TableStatus::Available),
            table("t2", TableStatus::Occupied),
            table("t3", TableStatus::Reserved),
        ]);
        store
    }

    #[test]
    fn test_select_t_then_u_leaves_exactly_u() {
        let mut store = store();
        assert!(store.select("t1"));
        assert!(store.select("t2"));
        assert_eq!(store.selected_id(), Some("t2"));
        assert_eq!(store.selected_table().map(|t| t.id.as_str()), Some("t2"));
    }

    #[test]
    fn test_clear_selection_leaves_none() {
        let mut store = store();
        store.select("t1");
        store.clear_selection();
        assert!(store.selected_id().is_none());
        assert!(store.selected_actions().is_empty());
    }

    #[test]
    fn test_select_unknown_id_is_rejected() {
        let mut store = store();
        store.select("t1");
        assert!(!store.select("t99"));
        assert_eq!(store.selected_id(), Some("t1"));
    }

    #[test]
    fn test_refresh_reconciles_dangling_selection() {
        let mut store = store();
        store.select("t3");
        store.replace(vec![table("t1", TableStatus::Available)]);
        assert!(store.selected_id().is_none());
    }

    #[test]
    fn test_refresh_keeps_valid_selection() {
        let mut store = store();
        store.select("t2");
        store.replace(vec![
            table("t2", TableStatus::NeedsCleaning),
            table("t4", TableStatus::Available),
        ]);
        assert_eq!(store.selected_id(), Some("t2"));
        // Actions follow the refreshed status
        assert_eq!(store.selected_actions(), &[TableAction::MarkAvailable]);
    }

    #[test]
    fn test_selected_actions_follow_status() {
        let mut store = store();
        store.select("t1");
        assert_eq!(store.selected_actions(), &[TableAction::StartOrder]);
        store.select("t2");
        assert_eq!(store.selected_actions().len(), 3);
    }

    #[test]
    fn test_with_status_filter() {
        let store = store();
        assert_eq!(store.with_status(TableStatus::Occupied).count(), 1);
        assert_eq!(store.with_status(TableStatus::Ordering).count(), 0);
    }
}
