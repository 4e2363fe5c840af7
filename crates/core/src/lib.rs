//! Civica domain core.
//!
//! Pure domain types shared by the persistence and HTTP layers:
//!
//! - [`error::CoreError`] — the domain error taxonomy.
//! - [`status::IssueStatus`] — the closed issue lifecycle enumeration.
//! - [`status::DepartmentTab`] — named filter views over a department's issues.
//! - [`roles`] — well-known role name constants.
//! - [`types`] — ID and timestamp aliases.

pub mod error;
pub mod roles;
pub mod status;
pub mod types;

pub use error::{CoreError, Entity};
pub use status::{DepartmentTab, IssueStatus};
