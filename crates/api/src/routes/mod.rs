//! Route definitions, one module per resource.

pub mod accounts;
pub mod admin;
pub mod catalog;
pub mod health;
pub mod issues;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                         catalog dump
/// /departments                        catalog dump
/// /statuses                           fixed status catalog
///
/// /upload-image                       multipart image upload (POST)
///
/// /create-issue                       create an issue (POST)
/// /my-issues/{user_id}                a citizen's issues
/// /dept/issues/{department_id}        department issues by tab
/// /dept/update-status/{issue_id}      status transition (POST)
///
/// /signup                             citizen signup (POST)
/// /dept-signup                        department-staff signup (POST)
/// /login                              credential check (POST)
///
/// /admin/pending-approvals            approval queue
/// /admin/approve/{user_id}            approve account (POST)
/// /admin/reject/{user_id}             reject account (DELETE)
/// /admin/all-issues                   every issue, newest first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(uploads::router())
        .merge(issues::router())
        .merge(accounts::router())
        .merge(admin::router())
}
