//! Department entity model.

use civica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Row from the `departments` table. Static reference data seeded by
/// migration; the approved staff set is derived from `users.department_id`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub contact_email: String,
    pub created_at: Timestamp,
}
