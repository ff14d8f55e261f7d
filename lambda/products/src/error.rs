//! Error types for the catalog store adapter.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepositoryError>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No product is stored under the requested id.
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("DynamoDB error: {0}")]
    Store(#[from] aws_sdk_dynamodb::Error),

    /// A stored item could not be mapped back to a product.
    #[error("Malformed product item: {0}")]
    MalformedItem(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}
