//! Shared code for the products lambdas.
//!
//! Holds the product model, the catalog store adapter and the request/response
//! plumbing that the fetch and admin functions have in common.

pub mod config;
pub mod error;
pub mod product;
pub mod repository;
pub mod response;
pub mod routing;

pub use config::Config;
pub use error::RepositoryError;
pub use product::{Product, ProductDraft};
#[cfg(any(test, feature = "test-util"))]
pub use repository::InMemoryProductRepository;
pub use repository::{DynamoDbProductRepository, ProductRepository};
