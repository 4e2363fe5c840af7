//! Issue image entity model.

use civica_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Append-only row from the `issue_images` table, written only at issue
/// creation time. Insertion order is preserved via the BIGSERIAL id.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct IssueImage {
    pub id: DbId,
    pub issue_id: DbId,
    pub image_url: String,
    pub created_at: Timestamp,
}
