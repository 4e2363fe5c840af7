//! Handlers for the reference-data catalogs: categories, departments,
//! and the fixed status enumeration.

use axum::extract::State;
use axum::Json;
use civica_core::status::StatusId;
use civica_core::IssueStatus;
use civica_db::models::category::Category;
use civica_db::models::department::Department;
use civica_db::repositories::{CategoryRepo, DepartmentRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One entry of the status catalog, derived from [`IssueStatus`].
#[derive(Debug, Serialize)]
pub struct StatusView {
    pub status_id: StatusId,
    pub status_name: &'static str,
}

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Department>>>> {
    let departments = DepartmentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: departments }))
}

/// GET /api/v1/statuses
///
/// Served from the closed enumeration; no table behind it.
pub async fn list_statuses() -> Json<DataResponse<Vec<StatusView>>> {
    let statuses = IssueStatus::ALL
        .into_iter()
        .map(|status| StatusView {
            status_id: status.id(),
            status_name: status.display_name(),
        })
        .collect();
    Json(DataResponse { data: statuses })
}
