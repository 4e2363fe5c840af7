//! Domain error taxonomy.
//!
//! Every fault a workflow can produce is one of these kinds; the HTTP
//! layer maps each kind to a status code and a stable error code string.
//! Lookup failures carry the entity kind so messages name what was
//! missing, not just an id.

use std::fmt;

use crate::types::DbId;

/// The entity kinds a lookup can fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Department,
    Category,
    Issue,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::User => "user",
            Entity::Department => "department",
            Entity::Category => "category",
            Entity::Issue => "issue",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup found no matching row. `key` describes what was searched
    /// for (an id, an email, ...).
    #[error("{entity} not found ({key})")]
    NotFound { entity: Entity, key: String },

    /// The caller's input failed a domain rule.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The request collides with existing state (e.g. a taken email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Credentials are missing or wrong.
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// The caller is known but not allowed to do this.
    #[error("not permitted: {0}")]
    Forbidden(String),
}

impl CoreError {
    /// Lookup failure for an entity addressed by its primary id.
    pub fn not_found(entity: Entity, id: DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: format!("id {id}"),
        }
    }
}
