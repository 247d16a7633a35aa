//! Category service: persistence-aware rules that span more than one aggregate.

use tracing::{debug, info, warn};

use assistance_core::Entity;

use crate::category::{ActiveFilter, Category};
use crate::error::{CategoryError, CategoryResult, is_blank};
use crate::repository::CategoryRepository;

/// Enforces category name uniqueness across the repository and mediates reads.
#[derive(Debug)]
pub struct CategoryService<R>
where
    R: CategoryRepository,
{
    repo: R,
}

impl<R> CategoryService<R>
where
    R: CategoryRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Persist a new category. Its name must not be taken by any stored category.
    pub fn create(&self, category: &Category) -> CategoryResult<()> {
        let taken = self
            .repo
            .find_by_name(category.name())
            .map_err(CategoryError::CreateFailed)?;
        if taken.is_some() {
            warn!(name = category.name(), "category name already exists");
            return Err(CategoryError::DuplicateCategoryName);
        }

        self.repo
            .create(category)
            .map_err(CategoryError::CreateFailed)?;

        info!(
            category_id = %category.id(),
            name = category.name(),
            "category created"
        );
        Ok(())
    }

    /// Persist changes to an existing category.
    ///
    /// A rename may not collide with a different stored category; keeping the
    /// current name is always allowed.
    pub fn update(&self, category: &Category) -> CategoryResult<()> {
        if is_blank(category.name()) {
            return Err(CategoryError::EmptyName);
        }

        let existing = self
            .repo
            .find_by_name(category.name())
            .map_err(CategoryError::UpdateFailed)?;
        if let Some(existing) = existing {
            if !existing.same_identity(category) {
                warn!(
                    name = category.name(),
                    category_id = %category.id(),
                    existing_id = %existing.id(),
                    "category name already used by another category"
                );
                return Err(CategoryError::DuplicateCategoryName);
            }
        }

        self.repo
            .update(category)
            .map_err(CategoryError::UpdateFailed)?;

        info!(category_id = %category.id(), "category updated");
        Ok(())
    }

    pub fn get_by_id(&self, id: &str) -> CategoryResult<Option<Category>> {
        if is_blank(id) {
            return Err(CategoryError::EmptyId);
        }
        debug!(category_id = id, "looking up category by id");
        Ok(self.repo.find(id)?)
    }

    pub fn get_by_name(&self, name: &str) -> CategoryResult<Option<Category>> {
        if is_blank(name) {
            return Err(CategoryError::EmptyName);
        }
        debug!(name, "looking up category by name");
        Ok(self.repo.find_by_name(name)?)
    }

    /// All categories matching `filter`.
    pub fn get_all(&self, filter: ActiveFilter) -> CategoryResult<Vec<Category>> {
        let mut categories = self.repo.find_all(filter.active)?;
        // The repository is an external collaborator; don't rely on it honoring the filter.
        categories.retain(|c| filter.matches(c));
        debug!(count = categories.len(), active = ?filter.active, "listed categories");
        Ok(categories)
    }
}
