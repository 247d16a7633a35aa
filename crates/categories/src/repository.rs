//! Category persistence port and an in-memory implementation.

use std::sync::{Arc, RwLock};

use crate::category::Category;
use crate::error::RepositoryError;

/// Storage for categories.
///
/// Lookups report "not found" as `Ok(None)`; errors are reserved for storage
/// failures.
pub trait CategoryRepository: Send + Sync {
    fn create(&self, category: &Category) -> Result<(), RepositoryError>;
    fn update(&self, category: &Category) -> Result<(), RepositoryError>;
    fn find(&self, id: &str) -> Result<Option<Category>, RepositoryError>;
    fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError>;
    /// All categories, or only those whose activation matches `active`.
    fn find_all(&self, active: Option<bool>) -> Result<Vec<Category>, RepositoryError>;
}

impl<R> CategoryRepository for Arc<R>
where
    R: CategoryRepository + ?Sized,
{
    fn create(&self, category: &Category) -> Result<(), RepositoryError> {
        (**self).create(category)
    }

    fn update(&self, category: &Category) -> Result<(), RepositoryError> {
        (**self).update(category)
    }

    fn find(&self, id: &str) -> Result<Option<Category>, RepositoryError> {
        (**self).find(id)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        (**self).find_by_name(name)
    }

    fn find_all(&self, active: Option<bool>) -> Result<Vec<Category>, RepositoryError> {
        (**self).find_all(active)
    }
}

/// In-memory category store for tests/dev.
///
/// Keeps insertion order. Records are stored and returned by value, so callers
/// never hold a live reference into the store.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    inner: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find_first<P>(&self, predicate: P) -> Result<Option<Category>, RepositoryError>
    where
        P: Fn(&Category) -> bool,
    {
        let rows = self.inner.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(rows.iter().find(|c| predicate(*c)).cloned())
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn create(&self, category: &Category) -> Result<(), RepositoryError> {
        let mut rows = self.inner.write().map_err(|_| RepositoryError::Poisoned)?;
        rows.push(category.clone());
        Ok(())
    }

    fn update(&self, category: &Category) -> Result<(), RepositoryError> {
        let mut rows = self.inner.write().map_err(|_| RepositoryError::Poisoned)?;
        let slot = rows
            .iter_mut()
            .find(|c| c.id() == category.id())
            .ok_or_else(|| RepositoryError::NotFound(category.id().to_string()))?;
        *slot = category.clone();
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Option<Category>, RepositoryError> {
        self.find_first(|c| c.id().as_str() == id)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        self.find_first(|c| c.name() == name)
    }

    fn find_all(&self, active: Option<bool>) -> Result<Vec<Category>, RepositoryError> {
        let rows = self.inner.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(rows
            .iter()
            .filter(|c| active.is_none_or(|a| c.is_active() == a))
            .cloned()
            .collect())
    }
}
