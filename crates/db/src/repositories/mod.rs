//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod department_repo;
pub mod issue_history_repo;
pub mod issue_image_repo;
pub mod issue_repo;
pub mod role_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use department_repo::DepartmentRepo;
pub use issue_history_repo::IssueHistoryRepo;
pub use issue_image_repo::IssueImageRepo;
pub use issue_repo::IssueRepo;
pub use role_repo::RoleRepo;
pub use user_repo::UserRepo;
