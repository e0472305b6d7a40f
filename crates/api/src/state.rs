use std::sync::Arc;

use deccan_content::ContentPageRenderer;
use deccan_core::media::MediaResolver;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Nothing in here is mutated after startup, so no page
/// load ever sees another's content.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Loads page documents from the content API with fallback.
    pub renderer: ContentPageRenderer,
    /// Resolves relative media paths against the upload base.
    pub media: MediaResolver,
}

impl AppState {
    /// Build state backed by the HTTP content API named in `config`.
    pub fn from_config(config: ServerConfig) -> Self {
        let renderer = ContentPageRenderer::http(config.content_api_base_url.clone());
        let media = MediaResolver::new(config.upload_base_url.clone());
        Self {
            config: Arc::new(config),
            renderer,
            media,
        }
    }
}
