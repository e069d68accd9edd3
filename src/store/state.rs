//! Application state held by the store.

use serde::{Deserialize, Serialize};

use crate::model::{Employee, Filters, Language, Modals, Pagination, ViewMode};
use crate::mvi::StoreState;

/// Full application state. This is also the persisted snapshot shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub employees: Vec<Employee>,
    /// Value copy of the employee being edited or deleted.
    /// `None` means no selection (create mode).
    pub current_employee: Option<Employee>,
    pub filters: Filters,
    pub pagination: Pagination,
    pub view: ViewMode,
    pub modals: Modals,
    pub language: Language,
}

impl StoreState for AppState {}

impl AppState {
    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Re-establish invariants on state coming from outside the reducer
    /// (persisted snapshots, hand-built initial state).
    ///
    /// Modals are always closed: a dialog is never restored open.
    pub fn restore_invariants(&mut self) {
        self.modals = Modals::default();
        self.pagination.items_per_page = self.pagination.items_per_page.max(1);
        self.pagination.total_items = self.employees.len();
        self.pagination.clamp_current_page();
    }
}
