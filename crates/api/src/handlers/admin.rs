//! Handlers for the admin approval queue.

use axum::extract::{Path, State};
use axum::Json;
use civica_core::error::{CoreError, Entity};
use civica_core::types::DbId;
use civica_db::models::user::PendingUser;
use civica_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/pending-approvals
///
/// All users awaiting approval, oldest first, with role names resolved.
pub async fn pending_approvals(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PendingUser>>>> {
    let pending = UserRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: pending }))
}

/// POST /api/v1/admin/approve/{user_id}
///
/// Approve an account. Idempotent for an already-approved user; 404 for an
/// unknown user id.
pub async fn approve(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let found = UserRepo::approve(&state.pool, user_id).await?;
    if !found {
        return Err(AppError::Core(CoreError::not_found(Entity::User, user_id)));
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// DELETE /api/v1/admin/reject/{user_id}
///
/// Reject an account by deleting the user row outright. Irreversible; 404
/// for an unknown user id.
pub async fn reject(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let found = UserRepo::delete(&state.pool, user_id).await?;
    if !found {
        return Err(AppError::Core(CoreError::not_found(Entity::User, user_id)));
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}
