use assistance_core::Entity;

use crate::category::{Category, CategoryId};

/// A category nested under a parent category.
///
/// Holds its own copy of the category as it was when added, so later changes
/// to the source category are not visible here. Activation and stock group are
/// tracked independently of both the snapshot and the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcategory {
    category: Category,
    active: bool,
    stock_group: String,
}

impl Subcategory {
    /// Snapshot `category`, keeping its activation state and taking
    /// `stock_group` (the parent's) as the initial stock group.
    pub(crate) fn snapshot(category: &Category, stock_group: &str) -> Self {
        Self {
            category: category.clone(),
            active: category.is_active(),
            stock_group: stock_group.to_string(),
        }
    }

    pub fn id(&self) -> &CategoryId {
        self.category.id()
    }

    pub fn name(&self) -> &str {
        self.category.name()
    }

    /// The category snapshot taken at insertion time.
    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn stock_group(&self) -> &str {
        &self.stock_group
    }

    /// Only affects this subcategory; the parent and siblings are untouched.
    pub fn inactivate(&mut self) {
        self.active = false;
    }

    /// Unchecked setter. The aggregate validates before calling it.
    pub fn change_stock_group(&mut self, stock_group: impl Into<String>) {
        self.stock_group = stock_group.into();
    }
}

impl Entity for Subcategory {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        self.category.id()
    }
}
