use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::category::ActiveFilter;
use crate::error::CategoryResult;
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

/// Input for [`FindCategoryUseCase`]. `active: None` lists every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindCategoryInput {
    #[serde(default)]
    pub active: Option<bool>,
}

/// Category listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub name: String,
    pub supplier_total: usize,
}

/// List categories, projected to name + bound supplier count.
pub struct FindCategoryUseCase<R>
where
    R: CategoryRepository,
{
    service: Arc<CategoryService<R>>,
}

impl<R> FindCategoryUseCase<R>
where
    R: CategoryRepository,
{
    pub fn new(service: Arc<CategoryService<R>>) -> Self {
        Self { service }
    }

    pub fn execute(&self, input: FindCategoryInput) -> CategoryResult<Vec<CategoryOutput>> {
        let filter = ActiveFilter {
            active: input.active,
        };

        Ok(self
            .service
            .get_all(filter)?
            .into_iter()
            .map(|category| CategoryOutput {
                supplier_total: category.supplier_count(),
                name: category.name().to_string(),
            })
            .collect())
    }
}
