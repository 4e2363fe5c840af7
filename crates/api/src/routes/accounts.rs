//! Route definitions for account workflows.

use axum::routing::post;
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// ```text
/// POST /signup       -> signup (citizen, auto-approved)
/// POST /dept-signup  -> dept_signup (awaits admin approval)
/// POST /login        -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(accounts::signup))
        .route("/dept-signup", post(accounts::dept_signup))
        .route("/login", post(accounts::login))
}
