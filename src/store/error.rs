use thiserror::Error;

/// Errors returned by store mutations. State is unchanged on error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Update or delete targeted an id that is not in the collection.
    #[error("Employee '{id}' not found")]
    NotFound { id: String },

    /// An add carried an id already present in the collection.
    #[error("Employee id '{id}' already exists")]
    DuplicateId { id: String },

    #[error("Invalid pagination: items per page must be positive (got {items_per_page})")]
    InvalidPagination { items_per_page: usize },
}
