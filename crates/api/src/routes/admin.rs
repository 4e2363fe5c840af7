//! Route definitions for the admin surface.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{admin, issues};
use crate::state::AppState;

/// ```text
/// GET    /admin/pending-approvals     -> pending_approvals
/// POST   /admin/approve/{user_id}     -> approve
/// DELETE /admin/reject/{user_id}      -> reject
/// GET    /admin/all-issues            -> all_issues
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/pending-approvals", get(admin::pending_approvals))
        .route("/admin/approve/{user_id}", post(admin::approve))
        .route("/admin/reject/{user_id}", delete(admin::reject))
        .route("/admin/all-issues", get(issues::all_issues))
}
