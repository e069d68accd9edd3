//! Intents accepted by the store reducer.

use crate::model::{
    Employee, EmployeePatch, FiltersPatch, Language, ModalKind, PaginationPatch, ViewMode,
};
use crate::mvi::Intent;

/// Mutations a view can request.
#[derive(Debug, Clone)]
pub enum StoreIntent {
    /// Append a record. Identity is assigned by the store before dispatch.
    AddEmployee { employee: Employee },

    /// Merge supplied fields into the record with `id`.
    UpdateEmployee { id: String, patch: EmployeePatch },

    DeleteEmployee { id: String },

    /// Select `employee` (value copy) and show `kind` if a record was given.
    /// Passing `None` closes every dialog.
    OpenModal {
        kind: ModalKind,
        employee: Option<Employee>,
    },

    /// Clear the selection and hide `kind`. Other dialogs are untouched.
    CloseModal { kind: ModalKind },

    UpdatePagination { patch: PaginationPatch },

    UpdateFilters { patch: FiltersPatch },

    SetView { view: ViewMode },

    SetLanguage { language: Language },
}

impl Intent for StoreIntent {}

/// What a reduction changed. Emitted for logging and for callers of
/// [`crate::store::Store::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    EmployeeAdded { id: String },
    EmployeeUpdated { id: String },
    EmployeeDeleted { id: String },
    TotalItemsChanged { total: usize },
    PageChanged { from: usize, to: usize },
    ItemsPerPageChanged { items_per_page: usize },
    ModalOpened { kind: ModalKind },
    ModalClosed { kind: ModalKind },
    SelectionChanged { id: Option<String> },
    FiltersChanged,
    ViewChanged { view: ViewMode },
    LanguageChanged { language: Language },
}
