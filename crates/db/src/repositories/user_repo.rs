//! Repository for the `users` table.

use civica_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, PendingUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, phone, password_hash, role_id, \
                       department_id, is_approved, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (full_name, email, phone, password_hash, role_id, department_id, is_approved)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .bind(input.department_id)
            .bind(input.is_approved)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users awaiting admin approval, joined with their role name,
    /// oldest first so the approval queue is FIFO.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<PendingUser>, sqlx::Error> {
        sqlx::query_as::<_, PendingUser>(
            "SELECT u.id, u.full_name, u.email, r.name AS role, u.department_id, u.created_at
             FROM users u
             JOIN roles r ON r.id = u.role_id
             WHERE u.is_approved = FALSE
             ORDER BY u.created_at ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Email addresses of all approved staff of a department.
    pub async fn approved_staff_emails(
        pool: &PgPool,
        department_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT email FROM users
             WHERE department_id = $1 AND is_approved = TRUE
             ORDER BY id ASC",
        )
        .bind(department_id)
        .fetch_all(pool)
        .await
    }

    /// Set `is_approved = TRUE`. Returns `false` if no row with the given
    /// `id` exists. Approving an already-approved user is a no-op success.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET is_approved = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a user row outright. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
