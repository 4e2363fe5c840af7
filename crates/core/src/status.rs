//! The closed issue lifecycle enumeration and department tab filters.
//!
//! Statuses are a fixed catalog, not free-form rows: the database stores only
//! the SMALLINT discriminant, and mapping to/from it happens at the
//! persistence boundary. Display names and the `/statuses` catalog endpoint
//! are derived from the enum.

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// Issue lifecycle status.
///
/// Discriminants are stable identifiers persisted in `issues.status_id` and
/// `issue_history.status_id`. There is no enforced transition graph: any
/// status may follow any status via an explicit transition, and the only
/// legal initial value is [`IssueStatus::Submitted`].
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueStatus {
    Submitted = 1,
    InProgress = 2,
    Resolved = 3,
    Rejected = 4,
}

impl IssueStatus {
    /// All statuses in catalog order.
    pub const ALL: [IssueStatus; 4] = [
        IssueStatus::Submitted,
        IssueStatus::InProgress,
        IssueStatus::Resolved,
        IssueStatus::Rejected,
    ];

    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Map a database status ID back to the enum. `None` for unknown IDs.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(IssueStatus::Submitted),
            2 => Some(IssueStatus::InProgress),
            3 => Some(IssueStatus::Resolved),
            4 => Some(IssueStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable display name shown to citizens and departments.
    pub fn display_name(self) -> &'static str {
        match self {
            IssueStatus::Submitted => "Submitted",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
            IssueStatus::Rejected => "Rejected",
        }
    }

    /// Whether the status is a closed outcome (Resolved or Rejected).
    ///
    /// Not a terminal state in the state-machine sense -- a closed issue can
    /// still be transitioned again -- but closed issues drop out of a
    /// department's "active" tab.
    pub fn is_closed(self) -> bool {
        matches!(self, IssueStatus::Resolved | IssueStatus::Rejected)
    }
}

impl From<IssueStatus> for StatusId {
    fn from(value: IssueStatus) -> Self {
        value as StatusId
    }
}

/// A named filter view over a department's issues.
///
/// The three tabs partition the department's issues: `active` is the
/// complement of the two exact-match tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentTab {
    /// Issues whose status is neither Resolved nor Rejected.
    Active,
    /// Issues with status Resolved.
    Resolved,
    /// Issues with status Rejected.
    Rejected,
}

impl DepartmentTab {
    /// Parse a tab name from a query parameter. `None` for unknown names.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(DepartmentTab::Active),
            "resolved" => Some(DepartmentTab::Resolved),
            "rejected" => Some(DepartmentTab::Rejected),
            _ => None,
        }
    }
}
