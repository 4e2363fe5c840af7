//! Repository for the `departments` table.

use civica_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::Department;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, contact_email, created_at";

/// Provides read operations for departments (reference data).
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Find a department by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all departments ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments ORDER BY name ASC");
        sqlx::query_as::<_, Department>(&query)
            .fetch_all(pool)
            .await
    }
}
