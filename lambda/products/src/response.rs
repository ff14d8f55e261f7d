//! Typed response building for the products API.

use lambda_http::http::StatusCode;
use lambda_http::{tracing, Body, Error, Response};
use serde::{Deserialize, Serialize};

use crate::error::RepositoryError;

pub const BAD_REQUEST: &str = "Bad Request";
pub const NOT_FOUND: &str = "Product not found";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string_pretty(value)?;
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::Text(body))?)
}

pub fn message(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    json(
        status,
        &Message {
            message: message.to_string(),
        },
    )
}

pub fn bad_request() -> Result<Response<Body>, Error> {
    message(StatusCode::BAD_REQUEST, BAD_REQUEST)
}

/// A body that does not deserialize into a product is answered like any
/// other unexpected failure.
pub fn invalid_payload(err: &serde_json::Error) -> Result<Response<Body>, Error> {
    tracing::error!(error = %err, "unreadable product payload");
    message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}

/// 404 for a missing product, 500 for anything the store reported.
pub fn repository_error(err: &RepositoryError) -> Result<Response<Body>, Error> {
    match err {
        RepositoryError::NotFound(id) => {
            tracing::warn!(product_id = %id, "product not found");
            message(StatusCode::NOT_FOUND, NOT_FOUND)
        }
        other => {
            tracing::error!(error = %other, "catalog store failure");
            message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}
