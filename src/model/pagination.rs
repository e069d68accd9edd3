//! Page position and size of the employee list.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Pagination sub-state.
///
/// `total_items` is owned by the store and always equals the number of
/// live employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            total_items: 0,
        }
    }
}

impl Pagination {
    pub fn with_items_per_page(items_per_page: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            ..Self::default()
        }
    }

    /// Last valid page number, never less than 1.
    pub fn last_page(&self) -> usize {
        let per_page = self.items_per_page.max(1);
        self.total_items.div_ceil(per_page).max(1)
    }

    /// Pull `current_page` back into `[1, last_page]`.
    pub fn clamp_current_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.last_page());
    }
}

/// Shallow-merge update for pagination. `total_items` is not patchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationPatch {
    pub current_page: Option<usize>,
    pub items_per_page: Option<usize>,
}
