use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages", get(pages::list_pages))
        .route("/pages/{key}", get(pages::get_page))
}
