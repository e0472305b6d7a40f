//! Handlers for content pages.
//!
//! Every request is a fresh page load: one fetch from the content API,
//! merged over the page's bundled defaults. Nothing is cached between
//! requests.

use axum::extract::{Path, State};
use axum::Json;
use deccan_content::ContentOrigin;
use deccan_core::document::{PageContentDocument, PageView};
use deccan_core::page::PageKey;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Entry in the page catalogue.
#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub key: PageKey,
    pub route: &'static str,
    pub endpoint: &'static str,
    /// Default title. Remote overrides are only applied on page load.
    pub title: String,
}

/// A loaded page, ready to render.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub key: PageKey,
    pub route: &'static str,
    /// Load state label, always `ready` once the handler returns.
    pub state: &'static str,
    pub origin: Option<ContentOrigin>,
    pub view: PageView,
}

/// GET /api/v1/pages
///
/// List every content page with its route and default title.
pub async fn list_pages() -> Json<DataResponse<Vec<PageSummary>>> {
    let pages = PageKey::ALL
        .into_iter()
        .map(|key| PageSummary {
            key,
            route: key.route(),
            endpoint: key.endpoint(),
            title: PageContentDocument::defaults_for(key).title().to_string(),
        })
        .collect();

    Json(DataResponse { data: pages })
}

/// GET /api/v1/pages/{key}
///
/// Load a page and return its view model. Content API failures are not
/// errors here: the page is served with its defaults and `origin` says so.
/// Unknown keys return 404.
pub async fn get_page(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<DataResponse<PageResponse>>> {
    let key: PageKey = key.parse()?;

    let loaded = state.renderer.load(key).await;
    let origin = loaded.origin();

    tracing::info!(page = %key, origin = ?origin, "Page loaded");

    Ok(Json(DataResponse {
        data: PageResponse {
            key,
            route: key.route(),
            state: loaded.label(),
            origin,
            view: loaded.document().view(key, &state.media),
        },
    }))
}
