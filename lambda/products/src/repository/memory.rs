use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductRepository;
use crate::error::{RepositoryError, Result};
use crate::product::{Product, ProductDraft};

/// Process-local store with the same semantics as the DynamoDB table, for tests.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Product> {
        self.products
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product> {
        let product = Product::create(draft);
        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn update_by_id(&self, id: &str, draft: ProductDraft) -> Result<Product> {
        let mut products = self.products.write().await;
        let stored = products
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        *stored = Product::with_id(id, draft);
        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<Product> {
        self.products
            .write()
            .await
            .remove(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }
}
