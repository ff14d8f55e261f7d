//! Resolves an API Gateway request into the catalog resource it addresses.

use lambda_http::request::RequestContext;
use lambda_http::{Request, RequestExt};

use crate::product::ProductDraft;

/// Resource templates served by the products API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// `/products`
    Products,
    /// `/products/{id}`
    Product(String),
}

impl Resource {
    /// Uses the gateway's route template (REST `resourcePath` or HTTP API
    /// `routeKey`) when present, the URI path otherwise. An `id` path parameter
    /// takes precedence over the raw path segment.
    pub fn from_request(event: &Request) -> Option<Self> {
        let path = route_template(event).unwrap_or_else(|| event.uri().path());
        let id_param = event.path_parameters_ref().and_then(|p| p.first("id"));
        Self::parse(path, id_param)
    }

    fn parse(path: &str, id_param: Option<&str>) -> Option<Self> {
        let mut segments = path.trim_matches('/').split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("products"), None, _) => Some(Resource::Products),
            (Some("products"), Some(segment), None) => {
                let id = id_param.unwrap_or(segment);
                if id.is_empty() || id == "{id}" {
                    None
                } else {
                    Some(Resource::Product(id.to_string()))
                }
            }
            _ => None,
        }
    }
}

fn route_template(event: &Request) -> Option<&str> {
    match event.request_context_ref()? {
        RequestContext::ApiGatewayV1(ctx) => ctx.resource_path.as_deref(),
        // "PUT /products/{id}"; "$default" carries no template.
        RequestContext::ApiGatewayV2(ctx) => ctx
            .route_key
            .as_deref()
            .and_then(|key| key.split_once(' '))
            .map(|(_, template)| template),
        _ => None,
    }
}

/// Request ids used to tie a log line to the gateway and Lambda invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correlation {
    pub lambda_request_id: Option<String>,
    pub api_request_id: Option<String>,
}

impl Correlation {
    pub fn from_request(event: &Request) -> Self {
        let api_request_id = match event.request_context_ref() {
            Some(RequestContext::ApiGatewayV1(ctx)) => ctx.request_id.clone(),
            Some(RequestContext::ApiGatewayV2(ctx)) => ctx.request_id.clone(),
            _ => None,
        };

        Self {
            lambda_request_id: event.lambda_context_ref().map(|c| c.request_id.clone()),
            api_request_id,
        }
    }

    pub fn lambda_request_id(&self) -> &str {
        self.lambda_request_id.as_deref().unwrap_or("-")
    }

    pub fn api_request_id(&self) -> &str {
        self.api_request_id.as_deref().unwrap_or("-")
    }
}

/// Deserializes the request body into the client product payload.
pub fn draft_from_body(event: &Request) -> Result<ProductDraft, serde_json::Error> {
    serde_json::from_slice(event.body().as_ref())
}
