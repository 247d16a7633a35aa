use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error("category id is empty")]
    EmptyCategoryId,

    #[error("product id is empty")]
    EmptyProductId,

    #[error("product storage unavailable: {0}")]
    Unavailable(String),
}

/// Product storage, queried by category.
pub trait ProductRepository: Send + Sync {
    /// Ids of the products classified under `category_id`. Unknown categories
    /// yield an empty list.
    fn find_by_category_id(&self, category_id: &str) -> Result<Vec<String>, ProductError>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn find_by_category_id(&self, category_id: &str) -> Result<Vec<String>, ProductError> {
        (**self).find_by_category_id(category_id)
    }
}

/// In-memory product/category links for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    by_category: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `product_id` under `category_id`. Linking twice is a no-op.
    pub fn link(&self, category_id: &str, product_id: &str) -> Result<(), ProductError> {
        if category_id.trim().is_empty() {
            return Err(ProductError::EmptyCategoryId);
        }
        if product_id.trim().is_empty() {
            return Err(ProductError::EmptyProductId);
        }

        let mut map = self
            .by_category
            .write()
            .map_err(|_| ProductError::Unavailable("lock poisoned".to_string()))?;
        let products = map.entry(category_id.to_string()).or_default();
        if !products.iter().any(|p| p == product_id) {
            products.push(product_id.to_string());
        }
        Ok(())
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_category_id(&self, category_id: &str) -> Result<Vec<String>, ProductError> {
        let map = self
            .by_category
            .read()
            .map_err(|_| ProductError::Unavailable("lock poisoned".to_string()))?;
        Ok(map.get(category_id).cloned().unwrap_or_default())
    }
}

/// Product queries used alongside the category catalog.
#[derive(Debug)]
pub struct ProductService<R>
where
    R: ProductRepository,
{
    repo: R,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn find_by_category_id(&self, category_id: &str) -> Result<Vec<String>, ProductError> {
        if category_id.trim().is_empty() {
            return Err(ProductError::EmptyCategoryId);
        }
        let products = self.repo.find_by_category_id(category_id)?;
        tracing::debug!(category_id, count = products.len(), "resolved products for category");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OfflineRepository;

    impl ProductRepository for OfflineRepository {
        fn find_by_category_id(&self, _category_id: &str) -> Result<Vec<String>, ProductError> {
            Err(ProductError::Unavailable("offline".to_string()))
        }
    }

    #[test]
    fn finds_products_linked_to_category() {
        let repo = Arc::new(InMemoryProductRepository::new());
        repo.link("cat-1", "prod-1").unwrap();
        repo.link("cat-1", "prod-2").unwrap();
        repo.link("cat-2", "prod-3").unwrap();
        let service = ProductService::new(repo);

        assert_eq!(
            service.find_by_category_id("cat-1").unwrap(),
            vec!["prod-1".to_string(), "prod-2".to_string()]
        );
        assert_eq!(service.find_by_category_id("cat-2").unwrap().len(), 1);
    }

    #[test]
    fn unknown_category_has_no_products() {
        let service = ProductService::new(InMemoryProductRepository::new());
        assert!(service.find_by_category_id("cat-9").unwrap().is_empty());
    }

    #[test]
    fn rejects_blank_category_id() {
        let service = ProductService::new(InMemoryProductRepository::new());
        assert_eq!(
            service.find_by_category_id(" ").unwrap_err(),
            ProductError::EmptyCategoryId
        );
    }

    #[test]
    fn passes_through_repository_errors() {
        let service = ProductService::new(OfflineRepository);
        assert_eq!(
            service.find_by_category_id("cat-1").unwrap_err(),
            ProductError::Unavailable("offline".to_string())
        );
    }

    #[test]
    fn link_rejects_blank_ids() {
        let repo = InMemoryProductRepository::new();
        assert_eq!(repo.link("", "prod-1").unwrap_err(), ProductError::EmptyCategoryId);
        assert_eq!(repo.link("cat-1", "").unwrap_err(), ProductError::EmptyProductId);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: linking is idempotent per (category, product) pair.
            #[test]
            fn linking_is_idempotent(products in prop::collection::vec("p[0-9]{1,3}", 1..20)) {
                let repo = InMemoryProductRepository::new();
                for p in &products {
                    repo.link("cat-1", p).unwrap();
                    repo.link("cat-1", p).unwrap();
                }

                let found = repo.find_by_category_id("cat-1").unwrap();
                let mut distinct = products.clone();
                distinct.sort();
                distinct.dedup();
                let mut sorted = found.clone();
                sorted.sort();
                prop_assert_eq!(sorted, distinct);
            }
        }
    }
}
