use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use assistance_core::IdGenerator;
use assistance_events::{Event, EventSink};

use crate::category::{Category, CategoryId};
use crate::config::CatalogConfig;
use crate::error::{CategoryError, CategoryResult};
use crate::event::CategoryCreated;
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

/// Input for [`CreateCategoryUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
    pub assistance_type: String,
    /// Falls back to [`CatalogConfig::default_stock_group`] when absent.
    #[serde(default)]
    pub stock_group: Option<String>,
}

/// Create a category under a fresh id, persist it, and announce it.
///
/// Any failure before dispatch short-circuits, so no event is sent for a
/// category that was not stored.
pub struct CreateCategoryUseCase<R, E, G>
where
    R: CategoryRepository,
    E: EventSink,
    G: IdGenerator,
{
    service: Arc<CategoryService<R>>,
    events: E,
    ids: G,
    config: CatalogConfig,
}

impl<R, E, G> CreateCategoryUseCase<R, E, G>
where
    R: CategoryRepository,
    E: EventSink,
    G: IdGenerator,
{
    pub fn new(service: Arc<CategoryService<R>>, events: E, ids: G, config: CatalogConfig) -> Self {
        Self {
            service,
            events,
            ids,
            config,
        }
    }

    /// Returns the id assigned to the new category.
    pub fn execute(&self, input: CreateCategoryInput) -> CategoryResult<CategoryId> {
        let id = CategoryId::from(self.ids.generate()?);
        let stock_group = input
            .stock_group
            .unwrap_or_else(|| self.config.default_stock_group.clone());

        let category = Category::new(
            input.name,
            &input.assistance_type,
            stock_group,
            Some(id.clone()),
        )?;

        self.service.create(&category)?;

        let event = CategoryCreated::from_category(&category, Utc::now());
        let payload = event.payload().map_err(|e| {
            warn!(category_id = %id, error = %e, "failed to serialize category event");
            CategoryError::EventDispatchFailed
        })?;

        if !self.events.send(event.event_type(), &payload) {
            warn!(category_id = %id, event_type = event.event_type(), "event dispatch failed");
            return Err(CategoryError::EventDispatchFailed);
        }

        info!(category_id = %id, event_type = event.event_type(), "category creation dispatched");
        Ok(id)
    }
}
