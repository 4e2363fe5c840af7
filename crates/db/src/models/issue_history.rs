//! Issue history entity model and DTOs.

use civica_core::status::StatusId;
use civica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Append-only row from the `issue_history` table.
///
/// One entry is written at issue creation and one at every subsequent
/// status transition; entries are never mutated or deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct IssueHistoryEntry {
    pub id: DbId,
    pub issue_id: DbId,
    pub status_id: StatusId,
    /// Acting user; `None` for guest submissions and system writes.
    pub updated_by: Option<DbId>,
    pub remarks: String,
    pub created_at: Timestamp,
}

/// DTO for appending a history entry.
#[derive(Debug)]
pub struct CreateIssueHistoryEntry {
    pub issue_id: DbId,
    pub status_id: StatusId,
    pub updated_by: Option<DbId>,
    pub remarks: String,
}
