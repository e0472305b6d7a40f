//! Handler for the shared site shell.

use axum::Json;
use deccan_core::site::SiteShell;

use crate::response::DataResponse;

/// GET /api/v1/layout
///
/// Navbar, footer, WhatsApp popup and call button shared by every page.
pub async fn get_layout() -> Json<DataResponse<SiteShell>> {
    Json(DataResponse {
        data: SiteShell::build(),
    })
}
