use lambda_http::http::{Method, StatusCode};
use lambda_http::{tracing, Body, Error, Request, Response};
use products::response;
use products::routing::{Correlation, Resource};
use products::ProductRepository;

#[derive(Debug, PartialEq, Eq)]
enum FetchRoute {
    List,
    Get(String),
}

impl FetchRoute {
    fn resolve(method: &Method, resource: Option<Resource>) -> Option<Self> {
        match (method, resource?) {
            (&Method::GET, Resource::Products) => Some(FetchRoute::List),
            (&Method::GET, Resource::Product(id)) => Some(FetchRoute::Get(id)),
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
        "products fetch request"
    );

    match FetchRoute::resolve(event.method(), Resource::from_request(&event)) {
        Some(FetchRoute::List) => match repository.list_all().await {
            Ok(products) => response::json(StatusCode::OK, &products),
            Err(e) => response::repository_error(&e),
        },
        Some(FetchRoute::Get(id)) => match repository.get_by_id(&id).await {
            Ok(product) => response::json(StatusCode::OK, &product),
            Err(e) => response::repository_error(&e),
        },
        None => response::bad_request(),
    }
}
