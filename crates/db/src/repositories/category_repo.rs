//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

/// Provides read operations for issue categories (reference data).
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, created_at FROM categories ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
    }
}
