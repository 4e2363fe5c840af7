//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts where the entity is written by the API

pub mod category;
pub mod department;
pub mod issue;
pub mod issue_history;
pub mod issue_image;
pub mod role;
pub mod user;
