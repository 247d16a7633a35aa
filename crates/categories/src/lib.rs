//! Assistance categories domain module.
//!
//! A category classifies services by assistance type (sale, paid, subsidized),
//! owns a set of subcategories and supplier bindings, and carries a stock group
//! used for inventory routing. Business rules live on the [`Category`]
//! aggregate; name uniqueness across persisted categories is enforced by
//! [`CategoryService`].

pub mod assistance_type;
pub mod category;
pub mod config;
pub mod error;
pub mod event;
pub mod repository;
pub mod service;
pub mod subcategory;
pub mod use_cases;

pub use assistance_type::AssistanceType;
pub use category::{ActiveFilter, Category, CategoryId};
pub use config::CatalogConfig;
pub use error::{CategoryError, CategoryResult, RepositoryError};
pub use event::CategoryCreated;
pub use repository::{CategoryRepository, InMemoryCategoryRepository};
pub use service::CategoryService;
pub use subcategory::Subcategory;
pub use use_cases::{
    CategoryOutput, CreateCategoryInput, CreateCategoryUseCase, FindCategoryInput,
    FindCategoryUseCase,
};
