#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use deccan_content::{ContentError, ContentPageRenderer, ContentSource};
use deccan_core::media::MediaResolver;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use deccan_api::config::ServerConfig;
use deccan_api::router::build_app_router;
use deccan_api::state::AppState;

pub const UPLOAD_BASE: &str = "https://uploads.test/uploads";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        content_api_base_url: "http://content.invalid/api".to_string(),
        upload_base_url: UPLOAD_BASE.to_string(),
    }
}

/// In-memory content API keyed by endpoint. Unknown endpoints answer 404.
#[derive(Default)]
pub struct FakeContentApi {
    bodies: HashMap<String, Value>,
}

impl FakeContentApi {
    pub fn with(mut self, endpoint: &str, body: Value) -> Self {
        self.bodies.insert(endpoint.to_string(), body);
        self
    }
}

#[async_trait]
impl ContentSource for FakeContentApi {
    async fn fetch(&self, endpoint: &str) -> Result<Value, ContentError> {
        self.bodies
            .get(endpoint)
            .cloned()
            .ok_or(ContentError::HttpStatus(404))
    }
}

/// Build the full application router over the given content source.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(source: FakeContentApi) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        renderer: ContentPageRenderer::new(Arc::new(source)),
        media: MediaResolver::new(UPLOAD_BASE),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
