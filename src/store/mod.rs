//! The employee store: sole owner and mutator of application state.
//!
//! Every successful mutation runs to completion before the call returns:
//!
//! 1. `StoreReducer` computes the next state and events (pure)
//! 2. the snapshot is written to the storage slot
//! 3. subscribers are notified with the snapshot
//!
//! Persistence failures are logged and never undo the mutation. Rejected
//! mutations (unknown id, invalid pagination) change nothing: no write, no
//! notification.
//!
//! The store is a cheap `Clone` handle. Hand a clone to every view that
//! needs it; all clones share one state. Mutations are expected from one
//! logical writer at a time; the state lock only guards the reduce step.

mod error;
mod intent;
mod reducer;
mod state;

pub use error::StoreError;
pub use intent::{StoreEvent, StoreIntent};
pub use reducer::StoreReducer;
pub use state::AppState;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::bus::{Listener, Subscription, SubscriptionBus};
use crate::format::{normalize_date, now_timestamp};
use crate::model::{
    Employee, EmployeeDraft, EmployeePatch, FiltersPatch, Language, ModalKind, PaginationPatch,
    ViewMode,
};
use crate::mvi::{Reducer, Transition};
use crate::persist::{self, MemoryStorage, Storage, DEFAULT_SLOT};

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<AppState>,
    storage: Box<dyn Storage>,
    slot: String,
    bus: SubscriptionBus<AppState>,
    /// Bumped by every successful mutation; a fan-out stops once it is stale.
    generation: AtomicU64,
    last_persist_error: Mutex<Option<String>>,
}

impl Store {
    /// Open the store on `storage`, restoring the snapshot in `slot`.
    ///
    /// Falls back to `defaults` when the slot is empty, unreadable, or
    /// malformed. Startup never fails.
    pub fn load(storage: impl Storage + 'static, slot: &str, defaults: AppState) -> Self {
        let state = match storage.read(slot) {
            Ok(Some(text)) => match persist::decode(&text) {
                Ok(state) => {
                    tracing::info!(
                        slot,
                        employees = state.employees.len(),
                        "Restored persisted state"
                    );
                    state
                }
                Err(e) => {
                    tracing::warn!(slot, error = %e, "Discarding malformed persisted state");
                    defaults
                }
            },
            Ok(None) => defaults,
            Err(e) => {
                tracing::warn!(slot, error = %e, "Failed to read persisted state");
                defaults
            }
        };

        Self::with_state(Box::new(storage), slot, state)
    }

    /// Ephemeral store with default state in the default slot.
    pub fn in_memory() -> Self {
        Self::load(MemoryStorage::new(), DEFAULT_SLOT, AppState::default())
    }

    fn with_state(storage: Box<dyn Storage>, slot: &str, mut state: AppState) -> Self {
        state.restore_invariants();
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(state),
                storage,
                slot: slot.to_string(),
                bus: SubscriptionBus::new(),
                generation: AtomicU64::new(0),
                last_persist_error: Mutex::new(None),
            }),
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Snapshot of the current state. Later mutations never affect it.
    pub fn state(&self) -> AppState {
        self.inner.state.lock().clone()
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.inner.state.lock().employees.clone()
    }

    pub fn current_employee(&self) -> Option<Employee> {
        self.inner.state.lock().current_employee.clone()
    }

    /// Message of the most recent failed write, cleared by the next
    /// successful one. `Some` means the session is no longer durable.
    pub fn last_persist_error(&self) -> Option<String> {
        self.inner.last_persist_error.lock().clone()
    }

    // ========================================================================
    // Subscription
    // ========================================================================

    pub fn subscribe(&self, listener: Listener<AppState>) -> Subscription {
        self.inner.bus.subscribe(listener)
    }

    pub fn subscribe_fn<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        self.inner.bus.subscribe_fn(listener)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Reduce, persist, notify. The single path every mutator goes through.
    ///
    /// If a listener mutates the store during delivery, the nested mutation
    /// notifies every listener with the newer snapshot and this fan-out
    /// stops, so each listener's last-seen state is the store's state.
    pub fn dispatch(&self, intent: StoreIntent) -> Result<Vec<StoreEvent>, StoreError> {
        let (snapshot, events, generation) = {
            let mut state = self.inner.state.lock();
            let Transition { state: next, events } = StoreReducer::reduce(&state, intent)?;
            *state = next;
            let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
            (state.clone(), events, generation)
        };

        for event in &events {
            tracing::debug!(?event, "Store event");
        }

        self.persist(&snapshot);
        self.inner.bus.notify_while(&snapshot, || {
            self.inner.generation.load(Ordering::SeqCst) == generation
        });
        Ok(events)
    }

    /// Store a new employee. Id, creation time and date normalization are
    /// handled here; the caller only supplies the form fields.
    pub fn add_employee(&self, draft: EmployeeDraft) -> Result<Employee, StoreError> {
        let draft = EmployeeDraft {
            date_of_employment: draft
                .date_of_employment
                .as_deref()
                .and_then(normalize_date),
            date_of_birth: draft.date_of_birth.as_deref().and_then(normalize_date),
            ..draft
        };
        let employee = Employee::from_draft(Uuid::new_v4().to_string(), now_timestamp(), draft);

        self.dispatch(StoreIntent::AddEmployee {
            employee: employee.clone(),
        })?;
        tracing::info!(id = %employee.id, "Employee added");
        Ok(employee)
    }

    /// Merge `patch` into the employee with `id`.
    ///
    /// Unknown ids fail with [`StoreError::NotFound`] and leave everything
    /// untouched.
    pub fn update_employee(&self, id: &str, patch: EmployeePatch) -> Result<Employee, StoreError> {
        let patch = EmployeePatch {
            date_of_employment: patch
                .date_of_employment
                .as_deref()
                .and_then(normalize_date),
            date_of_birth: patch.date_of_birth.as_deref().and_then(normalize_date),
            ..patch
        };
        self.dispatch(StoreIntent::UpdateEmployee {
            id: id.to_string(),
            patch,
        })?;

        let state = self.inner.state.lock();
        state
            .find_employee(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Remove the employee with `id` and return the removed record.
    pub fn delete_employee(&self, id: &str) -> Result<Employee, StoreError> {
        let removed = self
            .inner
            .state
            .lock()
            .find_employee(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        self.dispatch(StoreIntent::DeleteEmployee { id: id.to_string() })?;
        tracing::info!(id, "Employee deleted");
        Ok(removed)
    }

    /// Select `employee` and show `kind`; `None` closes every dialog.
    pub fn open_modal(&self, kind: ModalKind, employee: Option<Employee>) {
        self.dispatch_infallible(StoreIntent::OpenModal { kind, employee });
    }

    pub fn close_modal(&self, kind: ModalKind) {
        self.dispatch_infallible(StoreIntent::CloseModal { kind });
    }

    pub fn update_pagination(&self, patch: PaginationPatch) -> Result<(), StoreError> {
        self.dispatch(StoreIntent::UpdatePagination { patch })
            .map(|_| ())
    }

    pub fn update_filters(&self, patch: FiltersPatch) {
        self.dispatch_infallible(StoreIntent::UpdateFilters { patch });
    }

    pub fn set_view(&self, view: ViewMode) {
        self.dispatch_infallible(StoreIntent::SetView { view });
    }

    pub fn set_language(&self, language: Language) {
        self.dispatch_infallible(StoreIntent::SetLanguage { language });
    }

    fn dispatch_infallible(&self, intent: StoreIntent) {
        if let Err(e) = self.dispatch(intent) {
            tracing::error!(error = %e, "Unexpected store rejection");
        }
    }

    fn persist(&self, snapshot: &AppState) {
        let result = persist::encode(snapshot)
            .and_then(|text| self.inner.storage.write(&self.inner.slot, &text));

        let mut last_error = self.inner.last_persist_error.lock();
        match result {
            Ok(()) => *last_error = None,
            Err(e) => {
                tracing::warn!(slot = %self.inner.slot, error = %e, "Failed to persist state");
                *last_error = Some(e.to_string());
            }
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("slot", &self.inner.slot)
            .field("subscribers", &self.inner.bus.len())
            .finish()
    }
}
