use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assistance_events::Event;

use crate::assistance_type::AssistanceType;
use crate::category::{Category, CategoryId};

/// Event: CategoryCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCreated {
    pub category_id: CategoryId,
    pub name: String,
    pub assistance_type: AssistanceType,
    pub stock_group: String,
    pub occurred_at: DateTime<Utc>,
}

impl CategoryCreated {
    pub fn from_category(category: &Category, occurred_at: DateTime<Utc>) -> Self {
        Self {
            category_id: category.id().clone(),
            name: category.name().to_string(),
            assistance_type: category.assistance_type(),
            stock_group: category.stock_group().to_string(),
            occurred_at,
        }
    }
}

impl Event for CategoryCreated {
    fn event_type(&self) -> &'static str {
        "categories.category.created"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
