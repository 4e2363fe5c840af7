//! Repository for the append-only `issue_history` table.

use civica_core::types::DbId;
use sqlx::PgPool;

use crate::models::issue_history::{CreateIssueHistoryEntry, IssueHistoryEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, issue_id, status_id, updated_by, remarks, created_at";

/// Provides append and read operations for issue history entries.
/// Entries are never updated or deleted.
pub struct IssueHistoryRepo;

impl IssueHistoryRepo {
    /// Append a history entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIssueHistoryEntry,
    ) -> Result<IssueHistoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO issue_history (issue_id, status_id, updated_by, remarks)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IssueHistoryEntry>(&query)
            .bind(input.issue_id)
            .bind(input.status_id)
            .bind(input.updated_by)
            .bind(&input.remarks)
            .fetch_one(pool)
            .await
    }

    /// List an issue's history, oldest first.
    pub async fn list_for_issue(
        pool: &PgPool,
        issue_id: DbId,
    ) -> Result<Vec<IssueHistoryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM issue_history WHERE issue_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, IssueHistoryEntry>(&query)
            .bind(issue_id)
            .fetch_all(pool)
            .await
    }

    /// The most recent history entry for an issue, if any.
    pub async fn latest_for_issue(
        pool: &PgPool,
        issue_id: DbId,
    ) -> Result<Option<IssueHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM issue_history WHERE issue_id = $1 ORDER BY id DESC LIMIT 1"
        );
        sqlx::query_as::<_, IssueHistoryEntry>(&query)
            .bind(issue_id)
            .fetch_optional(pool)
            .await
    }
}
