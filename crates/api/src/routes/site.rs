use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/layout", get(site::get_layout))
}
