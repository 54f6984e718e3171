//! Framework-independent tower service adapter
//!
//! [`RapiDocService`] serves the documentation page as a plain
//! `tower::Service` over `http` request/response types, for hosts that are
//! not on axum. The service itself never errors; render failures become 500
//! responses.

use crate::render::{RAPIDOC_TEMPLATE, RequestContext};
use crate::server::handlers::base_path_for;
use crate::settings::RapiDocSettings;
use axum::http::{HeaderValue, Request, Response, StatusCode, header};
use std::convert::Infallible;
use std::future::{Ready, ready};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;

/// Tower service serving the documentation page
#[derive(Debug, Clone)]
pub struct RapiDocService {
    settings: Arc<RapiDocSettings>,
}

impl RapiDocService {
    /// Create a service from fully-configured settings
    pub fn new(settings: RapiDocSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Create a service sharing settings with other adapters
    pub fn from_shared(settings: Arc<RapiDocSettings>) -> Self {
        Self { settings }
    }

    fn respond(&self, request_path: &str) -> Response<String> {
        let base_path = base_path_for(request_path, &self.settings.path);
        let ctx = RequestContext::new(base_path);

        match self.settings.render_page(RAPIDOC_TEMPLATE, &ctx) {
            Ok(html) => {
                let mut response = Response::new(html);
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/html; charset=utf-8"),
                );
                response
            }
            Err(e) => {
                tracing::error!("Failed to render documentation page: {}", e);
                let mut response =
                    Response::new(format!("Failed to render documentation page: {}", e));
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                );
                response
            }
        }
    }
}

impl<B> Service<Request<B>> for RapiDocService {
    type Response = Response<String>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        ready(Ok(self.respond(request.uri().path())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tower::util::ServiceExt;

    fn request(path: &str) -> Request<()> {
        Request::builder().uri(path).body(()).unwrap()
    }

    #[tokio::test]
    async fn test_serves_html_page() {
        let service = RapiDocService::new(RapiDocSettings::new());
        let response = service.oneshot(request("/api-docs")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert!(response.body().contains("<rapi-doc"));
    }

    #[tokio::test]
    async fn test_mounted_prefix_resolves_custom_assets() {
        let mut settings = RapiDocSettings::new();
        settings.custom_javascript_path = Some("assets/docs.js".to_string());
        let service = RapiDocService::new(settings);

        let response = service.oneshot(request("/v2/api-docs")).await.unwrap();
        assert!(response.body().contains("src=\"/v2/assets/docs.js\""));
    }

    #[tokio::test]
    async fn test_poisoned_attribute_yields_500() {
        let mut settings = RapiDocSettings::new();
        settings
            .attributes_mut()
            .insert_raw("schema-style", json!("diagram"));
        let service = RapiDocService::new(settings);

        let response = service.oneshot(request("/api-docs")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.body().contains("schema-style"));
    }

    #[test]
    fn test_from_shared() {
        let settings = Arc::new(RapiDocSettings::new());
        let service = RapiDocService::from_shared(Arc::clone(&settings));
        let response = service.respond("/api-docs");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
