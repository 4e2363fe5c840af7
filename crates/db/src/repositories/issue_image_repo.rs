//! Repository for the append-only `issue_images` table.

use civica_core::types::DbId;
use sqlx::PgPool;

use crate::models::issue_image::IssueImage;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, issue_id, image_url, created_at";

/// Provides append and read operations for issue images.
pub struct IssueImageRepo;

impl IssueImageRepo {
    /// Attach an image URL to an issue, returning the created row.
    pub async fn create(
        pool: &PgPool,
        issue_id: DbId,
        image_url: &str,
    ) -> Result<IssueImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO issue_images (issue_id, image_url)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IssueImage>(&query)
            .bind(issue_id)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// List an issue's images in upload order.
    pub async fn list_for_issue(
        pool: &PgPool,
        issue_id: DbId,
    ) -> Result<Vec<IssueImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM issue_images WHERE issue_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, IssueImage>(&query)
            .bind(issue_id)
            .fetch_all(pool)
            .await
    }
}
