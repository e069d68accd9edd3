//! Notification ordering, unsubscription and re-entrancy.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{draft, temp_store, RecordingStorage};
use parking_lot::Mutex;
use roster::model::{
    Department, EmployeePatch, FiltersPatch, Language, ModalKind, PaginationPatch, ViewMode,
};
use roster::persist::DEFAULT_SLOT;
use roster::store::{AppState, Store, StoreError};

fn counter(store: &Store) -> (Arc<AtomicUsize>, roster::Subscription) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let sub = store.subscribe_fn(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    (count, sub)
}

#[test]
fn persist_happens_before_notify() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let store = Store::load(
        RecordingStorage {
            log: Arc::clone(&log),
        },
        DEFAULT_SLOT,
        AppState::default(),
    );
    let listener_log = Arc::clone(&log);
    store.subscribe_fn(move |_| listener_log.lock().push("notify".to_string()));

    store.set_view(ViewMode::List);
    store.add_employee(draft("Ada")).unwrap();

    assert_eq!(*log.lock(), ["persist", "notify", "persist", "notify"]);
}

#[test]
fn listener_sees_post_mutation_snapshot() {
    let (_dir, store) = temp_store();
    let seen = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&seen);
    store.subscribe_fn(move |state: &AppState| *slot.lock() = Some(state.clone()));

    store.add_employee(draft("Ada")).unwrap();
    let seen = seen.lock().clone().unwrap();
    assert_eq!(seen, store.state());
    assert_eq!(seen.pagination.total_items, 1);
}

#[test]
fn every_mutator_notifies_once() {
    let (_dir, store) = temp_store();
    let (count, _sub) = counter(&store);

    let ada = store.add_employee(draft("Ada")).unwrap();
    store
        .update_employee(
            &ada.id,
            EmployeePatch {
                email: Some("ada@lovelace.dev".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    store.open_modal(ModalKind::Delete, Some(ada.clone()));
    store.close_modal(ModalKind::Delete);
    store.close_modal(ModalKind::Delete);
    store.set_language(Language::Tr);
    store.set_view(ViewMode::List);
    store
        .update_pagination(PaginationPatch {
            current_page: Some(1),
            items_per_page: Some(5),
        })
        .unwrap();
    store.update_filters(FiltersPatch {
        search: Some("ada".to_string()),
        department: Some(Some(Department::Tech)),
        position: None,
    });
    store.delete_employee(&ada.id).unwrap();

    assert_eq!(count.load(Ordering::SeqCst), 10);
}

#[test]
fn rejected_mutations_do_not_notify() {
    let (_dir, store) = temp_store();
    let (count, _sub) = counter(&store);
    let before = store.state();

    let err = store
        .update_employee("missing", EmployeePatch::default())
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::NotFound {
            id: "missing".to_string()
        }
    );
    assert!(store.delete_employee("missing").is_err());

    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(store.state(), before);
}

#[test]
fn unsubscribe_is_idempotent() {
    let (_dir, store) = temp_store();
    let (count, sub) = counter(&store);

    store.set_view(ViewMode::List);
    assert!(sub.unsubscribe());
    assert!(!sub.unsubscribe());
    store.set_view(ViewMode::Table);

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn reentrant_mutation_terminates() {
    let (_dir, store) = temp_store();
    let calls = Arc::new(AtomicUsize::new(0));

    let inner_store = store.clone();
    let inner_calls = Arc::clone(&calls);
    store.subscribe_fn(move |state: &AppState| {
        inner_calls.fetch_add(1, Ordering::SeqCst);
        // Follow the view with the language, once.
        if state.view == ViewMode::List && state.language != Language::Tr {
            inner_store.set_language(Language::Tr);
        }
    });

    store.set_view(ViewMode::List);

    let state = store.state();
    assert_eq!(state.view, ViewMode::List);
    assert_eq!(state.language, Language::Tr);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn later_listeners_never_see_a_superseded_snapshot() {
    let (_dir, store) = temp_store();

    let inner_store = store.clone();
    store.subscribe_fn(move |state: &AppState| {
        if state.view == ViewMode::List && state.language != Language::Tr {
            inner_store.set_language(Language::Tr);
        }
    });

    let last_seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&last_seen);
    store.subscribe_fn(move |state: &AppState| log.lock().push(state.clone()));

    store.set_view(ViewMode::List);

    let seen = last_seen.lock().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen.last(), Some(&store.state()));
    assert_eq!(seen[0].language, Language::Tr);
    assert_eq!(seen[0].view, ViewMode::List);
}

#[test]
fn panicking_listener_does_not_block_others() {
    let (_dir, store) = temp_store();
    store.subscribe_fn(|_| panic!("listener failure"));
    let (count, _sub) = counter(&store);

    store.set_view(ViewMode::List);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(store.state().view, ViewMode::List);
}
