//! Catalog store adapter.
//!
//! [`ProductRepository`] is the only way the handlers reach persistence. Store
//! keys and attribute encodings never leave the implementations.

use async_trait::async_trait;

use crate::error::Result;
use crate::product::{Product, ProductDraft};

mod dynamodb;
#[cfg(any(test, feature = "test-util"))]
mod memory;

pub use dynamodb::DynamoDbProductRepository;
#[cfg(any(test, feature = "test-util"))]
pub use memory::InMemoryProductRepository;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Unordered full scan. An empty table yields an empty vector.
    async fn list_all(&self) -> Result<Vec<Product>>;

    async fn get_by_id(&self, id: &str) -> Result<Product>;

    /// Stores a new product under a generated id and returns it.
    async fn create(&self, draft: ProductDraft) -> Result<Product>;

    /// Overwrites the mutable fields of an existing product.
    ///
    /// The existence check is part of the write itself; an absent id is
    /// `NotFound` and nothing is inserted.
    async fn update_by_id(&self, id: &str, draft: ProductDraft) -> Result<Product>;

    /// Removes a product, returning what was stored.
    async fn delete_by_id(&self, id: &str) -> Result<Product>;
}
