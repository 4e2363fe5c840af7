//! User entity model and DTOs.

use civica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// External-facing user summaries are assembled in the API layer.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role_id: DbId,
    pub department_id: Option<DbId>,
    pub is_approved: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role_id: DbId,
    pub department_id: Option<DbId>,
    pub is_approved: bool,
}

/// A user awaiting admin approval, joined with their role name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PendingUser {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub department_id: Option<DbId>,
    pub created_at: Timestamp,
}
