use lambda_http::http::{Method, StatusCode};
use lambda_http::{tracing, Body, Error, Request, Response};
use products::response;
use products::routing::{draft_from_body, Correlation, Resource};
use products::ProductRepository;

#[derive(Debug, PartialEq, Eq)]
enum AdminRoute {
    Create,
    Update(String),
    Delete(String),
}

impl AdminRoute {
    fn resolve(method: &Method, resource: Option<Resource>) -> Option<Self> {
        match (method, resource?) {
            (&Method::POST, Resource::Products) => Some(AdminRoute::Create),
            (&Method::PUT, Resource::Product(id)) => Some(AdminRoute::Update(id)),
            (&Method::DELETE, Resource::Product(id)) => Some(AdminRoute::Delete(id)),
            _ => None,
        }
    }
}

pub(crate) async fn function_handler<R>(
    repository: &R,
    event: Request,
) -> Result<Response<Body>, Error>
where
    R: ProductRepository + ?Sized,
{
    let correlation = Correlation::from_request(&event);
    tracing::info!(
        lambda_request_id = correlation.lambda_request_id(),
        api_request_id = correlation.api_request_id(),
        method = %event.method(),
        path = event.uri().path(),
        "products admin request"
    );

    let route = match AdminRoute::resolve(event.method(), Resource::from_request(&event)) {
        Some(route) => route,
        None => return response::bad_request(),
    };

    match route {
        AdminRoute::Create => {
            let draft = match draft_from_body(&event) {
                Ok(draft) => draft,
                Err(e) => return response::invalid_payload(&e),
            };

            match repository.create(draft).await {
                Ok(product) => {
                    tracing::info!(product_id = %product.id, "product created");
                    response::json(StatusCode::CREATED, &product)
                }
                Err(e) => response::repository_error(&e),
            }
        }
        AdminRoute::Update(id) => {
            let draft = match draft_from_body(&event) {
                Ok(draft) => draft,
                Err(e) => return response::invalid_payload(&e),
            };

            match repository.update_by_id(&id, draft).await {
                Ok(product) => response::json(StatusCode::OK, &product),
                Err(e) => response::repository_error(&e),
            }
        }
        AdminRoute::Delete(id) => match repository.delete_by_id(&id).await {
            Ok(product) => response::json(StatusCode::OK, &product),
            Err(e) => response::repository_error(&e),
        },
    }
}
