//! Route definitions for the issue resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::issues;
use crate::state::AppState;

/// ```text
/// POST /create-issue                     -> create_issue
/// GET  /my-issues/{user_id}              -> my_issues
/// GET  /dept/issues/{department_id}      -> department_issues (?tab=)
/// POST /dept/update-status/{issue_id}    -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-issue", post(issues::create_issue))
        .route("/my-issues/{user_id}", get(issues::my_issues))
        .route("/dept/issues/{department_id}", get(issues::department_issues))
        .route("/dept/update-status/{issue_id}", post(issues::update_status))
}
