//! Pure projections from store state to what a list view shows.

use crate::model::{Employee, Pagination};

/// The employees on the current page, in insertion order.
///
/// Out-of-range pages yield an empty slice rather than an error.
pub fn visible_page<'a>(employees: &'a [Employee], pagination: &Pagination) -> &'a [Employee] {
    let per_page = pagination.items_per_page.max(1);
    let start = pagination
        .current_page
        .saturating_sub(1)
        .saturating_mul(per_page);
    if start >= employees.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(employees.len());
    &employees[start..end]
}

/// Number of pages needed for `total_items`. Zero when there is nothing
/// to show, matching the page-button row of the list view.
pub fn total_pages(pagination: &Pagination) -> usize {
    pagination
        .total_items
        .div_ceil(pagination.items_per_page.max(1))
}

/// State of the pagination control row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current_page: usize,
    pub total_pages: usize,
    /// "Previous" is enabled.
    pub has_previous: bool,
    /// "Next" is enabled.
    pub has_next: bool,
    /// Numbered page buttons, 1-based.
    pub pages: Vec<usize>,
}

pub fn page_controls(pagination: &Pagination) -> PageControls {
    let total = total_pages(pagination);
    PageControls {
        current_page: pagination.current_page,
        total_pages: total,
        has_previous: pagination.current_page > 1,
        has_next: pagination.current_page < total,
        pages: (1..=total).collect(),
    }
}
