//! Reducer for store state.

use crate::model::{Modals, Pagination};
use crate::mvi::{Reducer, Transition};

use super::error::StoreError;
use super::intent::{StoreEvent, StoreIntent};
use super::state::AppState;

/// Pure state transitions for the employee store.
///
/// Side effects (persisting, notifying subscribers) are handled by
/// [`crate::store::Store`] around the reduce call.
pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = AppState;
    type Intent = StoreIntent;
    type Event = StoreEvent;
    type Error = StoreError;

    fn reduce(
        state: &Self::State,
        intent: Self::Intent,
    ) -> Result<Transition<Self::State, Self::Event>, Self::Error> {
        let mut next = state.clone();
        let mut events = Vec::new();

        match intent {
            StoreIntent::AddEmployee { employee } => {
                if next.find_employee(&employee.id).is_some() {
                    return Err(StoreError::DuplicateId { id: employee.id });
                }
                let id = employee.id.clone();
                next.employees.push(employee);
                events.push(StoreEvent::EmployeeAdded { id });

                // Jump to the last page so the new record is visible.
                let before = next.pagination;
                next.pagination.total_items = next.employees.len();
                next.pagination.current_page = next.pagination.last_page();
                pagination_events(&before, &next.pagination, &mut events);
            }

            StoreIntent::UpdateEmployee { id, patch } => {
                let employee = next
                    .employees
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
                employee.apply_patch(patch);
                events.push(StoreEvent::EmployeeUpdated { id });
            }

            StoreIntent::DeleteEmployee { id } => {
                let index = next
                    .employees
                    .iter()
                    .position(|e| e.id == id)
                    .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;
                next.employees.remove(index);
                events.push(StoreEvent::EmployeeDeleted { id });

                // Only ever moves the page down.
                let before = next.pagination;
                next.pagination.total_items = next.employees.len();
                let last = next.pagination.last_page();
                if last < next.pagination.current_page {
                    next.pagination.current_page = last;
                }
                pagination_events(&before, &next.pagination, &mut events);
            }

            StoreIntent::OpenModal { kind, employee } => {
                let open = employee.is_some();
                let selection = employee.as_ref().map(|e| e.id.clone());
                if next.current_employee.as_ref().map(|e| &e.id) != selection.as_ref() {
                    events.push(StoreEvent::SelectionChanged { id: selection });
                }
                next.current_employee = employee;
                next.modals = Modals::exclusive(kind, open);

                if let Some(previous) = state.modals.open_kind() {
                    if !next.modals.is_open(previous) {
                        events.push(StoreEvent::ModalClosed { kind: previous });
                    }
                }
                if open {
                    events.push(StoreEvent::ModalOpened { kind });
                }
            }

            StoreIntent::CloseModal { kind } => {
                if next.current_employee.take().is_some() {
                    events.push(StoreEvent::SelectionChanged { id: None });
                }
                if next.modals.is_open(kind) {
                    events.push(StoreEvent::ModalClosed { kind });
                }
                next.modals.set(kind, false);
            }

            StoreIntent::UpdatePagination { patch } => {
                if let Some(items_per_page) = patch.items_per_page {
                    if items_per_page == 0 {
                        return Err(StoreError::InvalidPagination { items_per_page });
                    }
                    next.pagination.items_per_page = items_per_page;
                }
                if let Some(page) = patch.current_page {
                    next.pagination.current_page = page;
                }
                next.pagination.clamp_current_page();
                pagination_events(&state.pagination, &next.pagination, &mut events);
            }

            StoreIntent::UpdateFilters { patch } => {
                next.filters.merge(patch);
                if next.filters != state.filters {
                    events.push(StoreEvent::FiltersChanged);
                }
            }

            StoreIntent::SetView { view } => {
                next.view = view;
                if view != state.view {
                    events.push(StoreEvent::ViewChanged { view });
                }
            }

            StoreIntent::SetLanguage { language } => {
                next.language = language;
                if language != state.language {
                    events.push(StoreEvent::LanguageChanged { language });
                }
            }
        }

        Ok(Transition::new(next, events))
    }
}

fn pagination_events(before: &Pagination, after: &Pagination, events: &mut Vec<StoreEvent>) {
    if before.total_items != after.total_items {
        events.push(StoreEvent::TotalItemsChanged {
            total: after.total_items,
        });
    }
    if before.items_per_page != after.items_per_page {
        events.push(StoreEvent::ItemsPerPageChanged {
            items_per_page: after.items_per_page,
        });
    }
    if before.current_page != after.current_page {
        events.push(StoreEvent::PageChanged {
            from: before.current_page,
            to: after.current_page,
        });
    }
}
