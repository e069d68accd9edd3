//! Modal exclusivity and selection handling.

mod common;

use common::{draft, temp_store};
use roster::model::ModalKind;

#[test]
fn opening_one_modal_closes_the_other() {
    let (_dir, store) = temp_store();
    let ada = store.add_employee(draft("Ada")).unwrap();

    store.open_modal(ModalKind::AddEdit, Some(ada.clone()));
    let state = store.state();
    assert!(state.modals.add_edit);
    assert!(!state.modals.delete);
    assert_eq!(state.current_employee.as_ref().map(|e| &e.id), Some(&ada.id));

    store.open_modal(ModalKind::Delete, Some(ada.clone()));
    let state = store.state();
    assert!(state.modals.delete);
    assert!(!state.modals.add_edit);
    assert_eq!(state.modals.open_kind(), Some(ModalKind::Delete));
}

#[test]
fn opening_without_employee_closes_everything() {
    let (_dir, store) = temp_store();
    let ada = store.add_employee(draft("Ada")).unwrap();
    store.open_modal(ModalKind::Delete, Some(ada));

    store.open_modal(ModalKind::AddEdit, None);
    let state = store.state();
    assert_eq!(state.modals.open_kind(), None);
    assert_eq!(state.current_employee, None);
}

#[test]
fn closing_clears_selection() {
    let (_dir, store) = temp_store();
    let ada = store.add_employee(draft("Ada")).unwrap();
    store.open_modal(ModalKind::Delete, Some(ada));

    store.close_modal(ModalKind::Delete);
    let state = store.state();
    assert!(!state.modals.delete);
    assert_eq!(store.current_employee(), None);
}

#[test]
fn deleting_the_selected_employee_keeps_selection_until_close() {
    let (_dir, store) = temp_store();
    let ada = store.add_employee(draft("Ada")).unwrap();
    store.open_modal(ModalKind::Delete, Some(ada.clone()));

    store.delete_employee(&ada.id).unwrap();
    assert!(store.employees().is_empty());
    assert_eq!(store.current_employee().map(|e| e.id), Some(ada.id));

    store.close_modal(ModalKind::Delete);
    assert_eq!(store.current_employee(), None);
}
