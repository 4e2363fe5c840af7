//! Route definition for image uploads.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// ```text
/// POST /upload-image  -> upload_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/upload-image", post(uploads::upload_image))
}
