//! Products domain module.
//!
//! Resolves which products are classified under an assistance category.

pub mod product;

pub use product::{InMemoryProductRepository, ProductError, ProductRepository, ProductService};
