//! Application use cases: thin orchestration over the service and ports.

pub mod create;
pub mod find;

pub use create::{CreateCategoryInput, CreateCategoryUseCase};
pub use find::{CategoryOutput, FindCategoryInput, FindCategoryUseCase};
