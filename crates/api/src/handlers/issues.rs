//! Handlers for the issue resource: creation, status transitions, and the
//! read-only listing projections.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use civica_core::status::StatusId;
use civica_core::types::{DbId, Timestamp};
use civica_core::{DepartmentTab, IssueStatus};
use civica_db::models::issue::Issue;
use civica_db::repositories::IssueRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::lifecycle::{self, NewIssue};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /create-issue`.
///
/// Deliberately has no status field: unknown keys (including any
/// client-sent status) are dropped at deserialization, and the server
/// always starts the issue as Submitted.
#[derive(Debug, Deserialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub department_id: DbId,
    pub location_id: DbId,
    /// `None` for guest submissions.
    pub user_id: Option<DbId>,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Request body for `POST /dept/update-status/{issue_id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status_id: StatusId,
    pub updated_by: Option<DbId>,
    pub remarks: Option<String>,
}

/// Query parameters for `GET /dept/issues/{department_id}`.
#[derive(Debug, Deserialize)]
pub struct TabQuery {
    /// One of `active`, `resolved`, `rejected`. Defaults to `active`.
    pub tab: Option<String>,
}

/// An issue joined with its status display name.
///
/// The join happens in-process against the closed status enumeration, so
/// listing N issues costs exactly one query.
#[derive(Debug, Serialize)]
pub struct IssueView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub department_id: DbId,
    pub location_id: DbId,
    pub user_id: Option<DbId>,
    pub status_id: StatusId,
    pub status_name: &'static str,
    pub created_at: Timestamp,
}

impl From<Issue> for IssueView {
    fn from(issue: Issue) -> Self {
        let status_name = issue
            .status()
            .map(IssueStatus::display_name)
            .unwrap_or("Unknown");
        IssueView {
            id: issue.id,
            title: issue.title,
            description: issue.description,
            category_id: issue.category_id,
            department_id: issue.department_id,
            location_id: issue.location_id,
            user_id: issue.user_id,
            status_id: issue.status_id,
            status_name,
            created_at: issue.created_at,
        }
    }
}

fn to_views(issues: Vec<Issue>) -> Vec<IssueView> {
    issues.into_iter().map(IssueView::from).collect()
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/create-issue
pub async fn create_issue(
    State(state): State<AppState>,
    Json(input): Json<CreateIssueRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let issue_id = lifecycle::create_issue(
        &state,
        NewIssue {
            title: input.title,
            description: input.description,
            category_id: input.category_id,
            department_id: input.department_id,
            location_id: input.location_id,
            user_id: input.user_id,
            remarks: input.remarks,
            images: input.images,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "ok": true, "issue_id": issue_id })),
    ))
}

/// POST /api/v1/dept/update-status/{issue_id}
pub async fn update_status(
    State(state): State<AppState>,
    Path(issue_id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let new_status = IssueStatus::from_id(input.status_id).ok_or_else(|| {
        AppError::BadRequest(format!("unknown status_id {}", input.status_id))
    })?;

    lifecycle::transition_status(&state, issue_id, new_status, input.updated_by, input.remarks)
        .await?;

    Ok(Json(serde_json::json!({ "ok": true })))
}

/// GET /api/v1/admin/all-issues
pub async fn all_issues(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<IssueView>>>> {
    let issues = IssueRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse {
        data: to_views(issues),
    }))
}

/// GET /api/v1/my-issues/{user_id}
pub async fn my_issues(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<IssueView>>>> {
    let issues = IssueRepo::list_by_user(&state.pool, user_id).await?;
    Ok(Json(DataResponse {
        data: to_views(issues),
    }))
}

/// GET /api/v1/dept/issues/{department_id}?tab=
pub async fn department_issues(
    State(state): State<AppState>,
    Path(department_id): Path<DbId>,
    Query(params): Query<TabQuery>,
) -> AppResult<Json<DataResponse<Vec<IssueView>>>> {
    let tab_name = params.tab.as_deref().unwrap_or("active");
    let tab = DepartmentTab::parse(tab_name).ok_or_else(|| {
        AppError::BadRequest(format!(
            "unknown tab '{tab_name}' (expected active, resolved, or rejected)"
        ))
    })?;

    let issues = IssueRepo::list_by_department(&state.pool, department_id, tab).await?;
    Ok(Json(DataResponse {
        data: to_views(issues),
    }))
}
