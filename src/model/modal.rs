//! Dialog visibility sub-state.

use serde::{Deserialize, Serialize};

/// Closed set of dialogs the roster can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    /// Delete confirmation.
    Delete,
    /// Add/edit employee form.
    AddEdit,
}

impl ModalKind {
    pub fn all() -> &'static [ModalKind] {
        &[Self::Delete, Self::AddEdit]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::AddEdit => "addEdit",
        }
    }
}

/// Visibility flag per modal kind. At most one flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Modals {
    pub delete: bool,
    pub add_edit: bool,
}

impl Modals {
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Delete => self.delete,
            ModalKind::AddEdit => self.add_edit,
        }
    }

    pub fn set(&mut self, kind: ModalKind, open: bool) {
        match kind {
            ModalKind::Delete => self.delete = open,
            ModalKind::AddEdit => self.add_edit = open,
        }
    }

    /// All-closed map with `kind` set to `open`.
    pub fn exclusive(kind: ModalKind, open: bool) -> Self {
        let mut modals = Self::default();
        modals.set(kind, open);
        modals
    }

    /// The open modal, if any.
    pub fn open_kind(&self) -> Option<ModalKind> {
        ModalKind::all().iter().copied().find(|k| self.is_open(*k))
    }
}
