//! Repository for the `issues` table.

use civica_core::status::StatusId;
use civica_core::types::DbId;
use civica_core::{DepartmentTab, IssueStatus};
use sqlx::PgPool;

use crate::models::issue::{CreateIssue, Issue};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category_id, department_id, \
                       location_id, user_id, status_id, created_at";

/// Provides CRUD operations for issues.
pub struct IssueRepo;

impl IssueRepo {
    /// Insert a new issue, returning the created row.
    ///
    /// The status is always [`IssueStatus::Submitted`] -- the insert does not
    /// accept a caller-supplied status, which keeps the only legal initial
    /// state enforced at the persistence boundary.
    pub async fn create(pool: &PgPool, input: &CreateIssue) -> Result<Issue, sqlx::Error> {
        let query = format!(
            "INSERT INTO issues (title, description, category_id, department_id, location_id, user_id, status_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.department_id)
            .bind(input.location_id)
            .bind(input.user_id)
            .bind(IssueStatus::Submitted.id())
            .fetch_one(pool)
            .await
    }

    /// Find an issue by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Issue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM issues WHERE id = $1");
        sqlx::query_as::<_, Issue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Unconditionally set the current status. Returns `false` if no row with
    /// the given `id` exists. Concurrent updates are last-write-wins.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: IssueStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE issues SET status_id = $2 WHERE id = $1")
            .bind(id)
            .bind(status.id())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all issues, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Issue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM issues ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Issue>(&query).fetch_all(pool).await
    }

    /// List issues submitted by a user, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Issue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM issues WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a department's issues filtered by tab, newest first.
    ///
    /// The three tabs partition the department's issues: `active` is the
    /// complement of the `resolved` and `rejected` exact matches.
    pub async fn list_by_department(
        pool: &PgPool,
        department_id: DbId,
        tab: DepartmentTab,
    ) -> Result<Vec<Issue>, sqlx::Error> {
        let (filter, statuses): (&str, Vec<StatusId>) = match tab {
            DepartmentTab::Active => (
                "status_id NOT IN ($2, $3)",
                vec![IssueStatus::Resolved.id(), IssueStatus::Rejected.id()],
            ),
            DepartmentTab::Resolved => ("status_id = $2", vec![IssueStatus::Resolved.id()]),
            DepartmentTab::Rejected => ("status_id = $2", vec![IssueStatus::Rejected.id()]),
        };

        let query = format!(
            "SELECT {COLUMNS} FROM issues
             WHERE department_id = $1 AND {filter}
             ORDER BY created_at DESC, id DESC"
        );
        let mut q = sqlx::query_as::<_, Issue>(&query).bind(department_id);
        for status_id in statuses {
            q = q.bind(status_id);
        }
        q.fetch_all(pool).await
    }
}
