pub mod health;
pub mod pages;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /layout                    site shell (navbar, footer, popups)
/// /pages                     page catalogue
/// /pages/{key}               resolved page view
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(site::router())
        .merge(pages::router())
}
