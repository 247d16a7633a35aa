use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use assistance_core::{AggregateRoot, Entity};

use crate::assistance_type::AssistanceType;
use crate::error::{CategoryError, CategoryResult, is_blank};
use crate::subcategory::Subcategory;

/// Category identifier.
///
/// Opaque and assigned by the caller; a category built without one carries an
/// empty id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the id is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.0)
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Activation filter shared by category listings and a category's subcategories.
/// `active: None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub active: Option<bool>,
}

impl ActiveFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_active(active: bool) -> Self {
        Self {
            active: Some(active),
        }
    }

    pub fn accepts(&self, active: bool) -> bool {
        self.active.is_none_or(|wanted| wanted == active)
    }

    pub fn matches<A: AggregateRoot>(&self, aggregate: &A) -> bool {
        self.accepts(aggregate.is_active())
    }
}

/// Aggregate root: Category.
///
/// Every mutation validates its input before touching state, so a failed call
/// leaves the category exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    assistance_type: AssistanceType,
    stock_group: String,
    active: bool,
    subcategories: HashMap<CategoryId, Subcategory>,
    suppliers: HashSet<String>,
}

impl Category {
    /// Build a new, active category with no subcategories or suppliers.
    ///
    /// Fails with the first violated rule, checked in order: name, stock
    /// group, assistance type.
    pub fn new(
        name: impl Into<String>,
        assistance_type: &str,
        stock_group: impl Into<String>,
        id: Option<CategoryId>,
    ) -> CategoryResult<Self> {
        let name = name.into();
        let stock_group = stock_group.into();

        if is_blank(&name) {
            return Err(CategoryError::EmptyName);
        }
        if is_blank(&stock_group) {
            return Err(CategoryError::EmptyStockGroup);
        }
        let assistance_type = assistance_type.parse::<AssistanceType>()?;

        Ok(Self {
            id: id.unwrap_or_default(),
            name,
            assistance_type,
            stock_group,
            active: true,
            subcategories: HashMap::new(),
            suppliers: HashSet::new(),
        })
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assistance_type(&self) -> AssistanceType {
        self.assistance_type
    }

    pub fn stock_group(&self) -> &str {
        &self.stock_group
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> CategoryResult<()> {
        let name = name.into();
        if is_blank(&name) {
            return Err(CategoryError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_assistance_type(&mut self, assistance_type: &str) -> CategoryResult<()> {
        self.assistance_type = assistance_type.parse()?;
        Ok(())
    }

    /// Deactivate the category and every current subcategory.
    ///
    /// There is no way back: categories are never reactivated.
    pub fn inactivate(&mut self) {
        self.active = false;
        for subcategory in self.subcategories.values_mut() {
            subcategory.inactivate();
        }
    }

    // Subcategories

    /// All subcategories matching `filter`, in no particular order.
    pub fn subcategories(&self, filter: ActiveFilter) -> Vec<&Subcategory> {
        self.subcategories
            .values()
            .filter(|s| filter.accepts(s.is_active()))
            .collect()
    }

    pub fn subcategory_count(&self) -> usize {
        self.subcategories.len()
    }

    /// Add a snapshot of `candidate` as a subcategory keyed by its id.
    ///
    /// The subcategory keeps the candidate's activation state but starts with
    /// this category's stock group. Names must be unique among siblings
    /// (exact, case-sensitive comparison).
    pub fn add_subcategory(&mut self, candidate: &Category) -> CategoryResult<()> {
        if self
            .subcategories
            .values()
            .any(|s| s.name() == candidate.name())
        {
            return Err(CategoryError::DuplicateSubcategoryName);
        }

        self.subcategories.insert(
            candidate.id().clone(),
            Subcategory::snapshot(candidate, &self.stock_group),
        );
        Ok(())
    }

    /// Remove the subcategory with `candidate`'s id. Removing an absent id is a no-op.
    pub fn remove_subcategory(&mut self, candidate: &Category) -> CategoryResult<()> {
        if candidate.id().is_empty() {
            return Err(CategoryError::EmptyId);
        }
        self.subcategories.remove(candidate.id().as_str());
        Ok(())
    }

    /// Look up a subcategory. An unknown id yields `Ok(None)`.
    pub fn get_subcategory(&self, id: &str) -> CategoryResult<Option<&Subcategory>> {
        if is_blank(id) {
            return Err(CategoryError::EmptyId);
        }
        Ok(self.subcategories.get(id))
    }

    fn subcategory_mut(&mut self, id: &str) -> CategoryResult<&mut Subcategory> {
        if is_blank(id) {
            return Err(CategoryError::EmptyId);
        }
        self.subcategories
            .get_mut(id)
            .ok_or_else(|| CategoryError::SubcategoryNotFound(id.to_string()))
    }

    /// Deactivate a single subcategory; the parent stays as it is.
    pub fn inactivate_subcategory(&mut self, id: &str) -> CategoryResult<()> {
        self.subcategory_mut(id)?.inactivate();
        Ok(())
    }

    pub fn change_subcategory_stock_group(
        &mut self,
        id: &str,
        stock_group: impl Into<String>,
    ) -> CategoryResult<()> {
        let stock_group = stock_group.into();
        let subcategory = self.subcategory_mut(id)?;
        if is_blank(&stock_group) {
            return Err(CategoryError::EmptyStockGroup);
        }
        subcategory.change_stock_group(stock_group);
        Ok(())
    }

    // Suppliers

    pub fn suppliers(&self) -> &HashSet<String> {
        &self.suppliers
    }

    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }

    /// Bind a supplier. Binding the same id twice has no further effect.
    pub fn add_supplier(&mut self, supplier_id: impl Into<String>) -> CategoryResult<()> {
        let supplier_id = supplier_id.into();
        if is_blank(&supplier_id) {
            return Err(CategoryError::EmptySupplierId);
        }
        self.suppliers.insert(supplier_id);
        Ok(())
    }

    pub fn remove_supplier(&mut self, supplier_id: &str) -> CategoryResult<()> {
        if is_blank(supplier_id) {
            return Err(CategoryError::EmptySupplierId);
        }
        self.suppliers.remove(supplier_id);
        Ok(())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {
    fn is_active(&self) -> bool {
        self.active
    }
}
