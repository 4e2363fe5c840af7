//! Issue entity model and DTOs.

use civica_core::status::StatusId;
use civica_core::types::{DbId, Timestamp};
use civica_core::IssueStatus;
use serde::Serialize;
use sqlx::FromRow;

/// Full issue row from the `issues` table.
///
/// `status_id` is the only mutable field and is changed only through
/// [`IssueRepo::update_status`](crate::repositories::IssueRepo::update_status).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Issue {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub department_id: DbId,
    pub location_id: DbId,
    /// Submitting user; `None` for guest submissions.
    pub user_id: Option<DbId>,
    pub status_id: StatusId,
    pub created_at: Timestamp,
}

impl Issue {
    /// Decode the persisted status ID into the closed enumeration.
    ///
    /// The `ck_issues_status` check constraint keeps the column within the
    /// catalog, so `None` only occurs if the schema and enum drift apart.
    pub fn status(&self) -> Option<IssueStatus> {
        IssueStatus::from_id(self.status_id)
    }
}

/// DTO for creating a new issue.
///
/// Carries no status field: every issue starts as
/// [`IssueStatus::Submitted`], enforced by the repository insert.
#[derive(Debug)]
pub struct CreateIssue {
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub department_id: DbId,
    pub location_id: DbId,
    pub user_id: Option<DbId>,
}
