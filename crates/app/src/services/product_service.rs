//! Product service: use-cases for registering products.

use servery_domain::error::{NotFoundError, ServeryError};
use servery_domain::id::ProductId;
use servery_domain::product::Product;

use crate::ports::ProductRepository;

/// Application service for product registration.
pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a product after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ServeryError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn create_product(&self, product: Product) -> Result<Product, ServeryError> {
        product.validate()?;
        let created = self.repo.create(product).await?;
        tracing::info!(product_id = %created.id, price = %created.price, "product created");
        Ok(created)
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::Product`] when no product with `id` exists.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ServeryError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::Product(id).into())
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_products(&self) -> Result<Vec<Product>, ServeryError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryStore, money};
    use servery_domain::error::ValidationError;

    #[tokio::test]
    async fn should_create_product_when_valid() {
        let store = InMemoryStore::default();
        let service = ProductService::new(store.clone());
        let product = Product::builder()
            .name("Fried chicken")
            .price(money(16000))
            .build()
            .unwrap();

        let created = service.create_product(product.clone()).await.unwrap();

        assert_eq!(created, product);
        assert_eq!(service.list_products().await.unwrap(), vec![product]);
    }

    #[tokio::test]
    async fn should_return_validation_error_when_name_is_blank() {
        let store = InMemoryStore::default();
        let service = ProductService::new(store.clone());
        let mut product = Product::builder()
            .name("Fried chicken")
            .price(money(16000))
            .build()
            .unwrap();
        product.name = "  ".to_string();

        let result = service.create_product(product).await;

        assert!(matches!(
            result,
            Err(ServeryError::Validation(ValidationError::EmptyName))
        ));
        assert!(store.state().products.is_empty());
    }

    #[tokio::test]
    async fn should_get_product_by_id() {
        let store = InMemoryStore::default();
        let product = store.seed_product("Soda", 500);

        let found = ProductService::new(store).get_product(product.id).await.unwrap();

        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_unknown() {
        let missing = ProductId::new();

        let result = ProductService::new(InMemoryStore::default())
            .get_product(missing)
            .await;

        assert!(matches!(
            result,
            Err(ServeryError::NotFound(NotFoundError::Product(id))) if id == missing
        ));
    }
}
