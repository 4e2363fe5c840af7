//! Well-known role name constants.
//!
//! These must match the seed data in the initial migration.

pub const ROLE_CITIZEN: &str = "citizen";
pub const ROLE_DEPARTMENT: &str = "department";
pub const ROLE_ADMIN: &str = "admin";
