//! Route definitions for the reference-data catalogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// ```text
/// GET /categories   -> list_categories
/// GET /departments  -> list_departments
/// GET /statuses     -> list_statuses
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/departments", get(catalog::list_departments))
        .route("/statuses", get(catalog::list_statuses))
}
