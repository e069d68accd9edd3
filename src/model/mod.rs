//! Data model owned by the store.

mod employee;
mod modal;
mod pagination;

pub use employee::{Department, Employee, EmployeeDraft, EmployeePatch, Position};
pub use modal::{ModalKind, Modals};
pub use pagination::{Pagination, PaginationPatch, DEFAULT_ITEMS_PER_PAGE};

use serde::{Deserialize, Serialize};

/// Layout used to present the employee list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Table,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::List => "list",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "table" => Some(Self::Table),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// Active translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Self::En, Self::Tr]
    }

    /// BCP 47 code, also the storage key.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    /// Native display name for the language picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Tr => "Türkçe",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.code() == s)
    }
}

/// List filters. Persisted with the rest of the state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filters {
    pub search: String,
    pub department: Option<Department>,
    pub position: Option<Position>,
}

/// Shallow-merge update for [`Filters`].
///
/// The outer `Option` means "supplied"; `Some(None)` clears a filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FiltersPatch {
    pub search: Option<String>,
    pub department: Option<Option<Department>>,
    pub position: Option<Option<Position>>,
}

impl Filters {
    pub fn merge(&mut self, patch: FiltersPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_parse() {
        assert_eq!(Language::parse("tr"), Some(Language::Tr));
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn view_mode_defaults_to_table() {
        assert_eq!(ViewMode::default(), ViewMode::Table);
        assert_eq!(ViewMode::parse("list"), Some(ViewMode::List));
    }

    #[test]
    fn filters_merge_is_shallow() {
        let mut filters = Filters {
            search: "ada".to_string(),
            department: Some(Department::Tech),
            position: None,
        };
        filters.merge(FiltersPatch {
            department: Some(None),
            position: Some(Some(Position::Senior)),
            ..Default::default()
        });
        assert_eq!(filters.search, "ada");
        assert_eq!(filters.department, None);
        assert_eq!(filters.position, Some(Position::Senior));
    }
}
