//! Category error model.

use thiserror::Error;

use assistance_core::DomainError;

/// Result type used across the categories module.
pub type CategoryResult<T> = Result<T, CategoryError>;

/// Failure reported by a category repository implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The record to update does not exist.
    #[error("category not found. id: {0}")]
    NotFound(String),

    /// The backing store could not serve the request.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Internal lock poisoning (in-memory stores).
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Category-level error.
///
/// Validation failures never leave partial state behind: the aggregate is
/// untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("the category name is empty")]
    EmptyName,

    #[error("the assistance type is invalid")]
    InvalidAssistanceType,

    #[error("the stock group is empty")]
    EmptyStockGroup,

    #[error("the supplierId is empty")]
    EmptySupplierId,

    #[error("id is empty")]
    EmptyId,

    #[error("already exists a subcategory with this name")]
    DuplicateSubcategoryName,

    #[error("the category name already exists")]
    DuplicateCategoryName,

    #[error("subcategory not found: {0}")]
    SubcategoryNotFound(String),

    #[error("error while dispatch event")]
    EventDispatchFailed,

    #[error("error while create category: {0}")]
    CreateFailed(#[source] RepositoryError),

    #[error("error while update category: {0}")]
    UpdateFailed(#[source] RepositoryError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// `true` when `value` has no characters besides whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
