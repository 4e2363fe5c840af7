//! Issue lifecycle orchestration: creation and status transitions.
//!
//! Both workflows follow the same shape: one fatal primary write, then a
//! sequence of dependent writes and a notification, each individually
//! guarded. There is no cross-write transaction -- once the issue row
//! lands, a later failure leaves the divergence in the error log rather
//! than rolling anything back.
//!
//! Invariants owned here:
//! - Every issue starts as `Submitted`; callers cannot supply an initial
//!   status.
//! - Every creation and every transition appends exactly one history entry
//!   (best-effort; failures are logged with the issue id).
//! - Notification failure never fails the workflow.

use civica_core::error::{CoreError, Entity};
use civica_core::types::DbId;
use civica_core::IssueStatus;
use civica_db::models::issue::{CreateIssue, Issue};
use civica_db::models::issue_history::CreateIssueHistoryEntry;
use civica_db::repositories::{
    DepartmentRepo, IssueHistoryRepo, IssueImageRepo, IssueRepo, UserRepo,
};

use crate::error::{AppError, AppResult};
use crate::notify::{self, EmailMessage};
use crate::state::AppState;

/// History remark when a citizen submits without one.
const DEFAULT_CREATE_REMARK: &str = "Issue submitted by citizen";

/// History remark when a transition is posted without one.
const DEFAULT_TRANSITION_REMARK: &str = "Status updated by department";

/// Display name used for guest submitters in notifications.
const GUEST_NAME: &str = "Guest";

/// Input for [`create_issue`]. Carries no status: the initial status is
/// always [`IssueStatus::Submitted`].
#[derive(Debug)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub department_id: DbId,
    pub location_id: DbId,
    /// `None` for guest submissions.
    pub user_id: Option<DbId>,
    pub remarks: String,
    pub images: Vec<String>,
}

/// Create an issue: insert the row, append the initial history entry,
/// attach images in upload order, and notify the department.
///
/// Only the issue insert itself is fatal. History and image failures are
/// logged with the issue id and do not abort or roll back; the
/// notification is fire-and-forget.
pub async fn create_issue(state: &AppState, input: NewIssue) -> AppResult<DbId> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }
    if input.description.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "description must not be empty".into(),
        )));
    }

    // 1. Primary write. A failure here fails the request.
    let issue = IssueRepo::create(
        &state.pool,
        &CreateIssue {
            title: input.title,
            description: input.description,
            category_id: input.category_id,
            department_id: input.department_id,
            location_id: input.location_id,
            user_id: input.user_id,
        },
    )
    .await?;

    // 2. Initial history entry.
    let remarks = if input.remarks.trim().is_empty() {
        DEFAULT_CREATE_REMARK.to_string()
    } else {
        input.remarks
    };
    if let Err(err) = IssueHistoryRepo::create(
        &state.pool,
        &CreateIssueHistoryEntry {
            issue_id: issue.id,
            status_id: IssueStatus::Submitted.id(),
            updated_by: None,
            remarks,
        },
    )
    .await
    {
        tracing::error!(issue_id = issue.id, error = %err, "failed to write initial history entry");
    }

    // 3. Image rows, upload order preserved, no dedup.
    for url in &input.images {
        if let Err(err) = IssueImageRepo::create(&state.pool, issue.id, url).await {
            tracing::error!(
                issue_id = issue.id,
                image_url = %url,
                error = %err,
                "failed to attach issue image"
            );
        }
    }

    // 4. Best-effort department notification.
    if let Err(err) = notify_department(state, &issue).await {
        tracing::warn!(
            issue_id = issue.id,
            error = %err,
            "could not compose department notification"
        );
    }

    Ok(issue.id)
}

/// Transition an issue's status and append the matching history entry.
///
/// There is no transition graph: any status may follow any status,
/// including reopening a resolved issue. Concurrent transitions are
/// last-write-wins. The submitter (if any) is notified best-effort.
pub async fn transition_status(
    state: &AppState,
    issue_id: DbId,
    new_status: IssueStatus,
    actor: Option<DbId>,
    remarks: Option<String>,
) -> AppResult<()> {
    // 1. Primary write; 404 if the issue does not exist.
    let updated = IssueRepo::update_status(&state.pool, issue_id, new_status).await?;
    if !updated {
        return Err(AppError::Core(CoreError::not_found(Entity::Issue, issue_id)));
    }

    // 2. History entry for the transition.
    let remarks = remarks
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TRANSITION_REMARK.to_string());
    if let Err(err) = IssueHistoryRepo::create(
        &state.pool,
        &CreateIssueHistoryEntry {
            issue_id,
            status_id: new_status.id(),
            updated_by: actor,
            remarks,
        },
    )
    .await
    {
        tracing::error!(issue_id, error = %err, "failed to write transition history entry");
    }

    // 3. Best-effort submitter notification.
    if let Err(err) = notify_submitter(state, issue_id, new_status).await {
        tracing::warn!(issue_id, error = %err, "could not compose submitter notification");
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Notification composition
// ---------------------------------------------------------------------------

/// Resolve the department contact and approved staff, compose the
/// new-issue message, and hand it to the notifier.
async fn notify_department(state: &AppState, issue: &Issue) -> Result<(), sqlx::Error> {
    let Some(department) = DepartmentRepo::find_by_id(&state.pool, issue.department_id).await?
    else {
        tracing::warn!(
            issue_id = issue.id,
            department_id = issue.department_id,
            "issue references a missing department, skipping notification"
        );
        return Ok(());
    };

    let mut recipients = vec![department.contact_email.clone()];
    recipients.extend(UserRepo::approved_staff_emails(&state.pool, department.id).await?);
    let recipients = notify::dedup_recipients(recipients);

    let submitter = match issue.user_id {
        Some(id) => UserRepo::find_by_id(&state.pool, id)
            .await?
            .map(|u| u.full_name)
            .unwrap_or_else(|| GUEST_NAME.to_string()),
        None => GUEST_NAME.to_string(),
    };

    let (subject, body) =
        issue_created_message(&issue.title, &issue.description, &submitter, &department.name);
    state.notifier.dispatch(EmailMessage {
        to: recipients,
        subject,
        body,
    });
    Ok(())
}

/// Resolve the issue's submitter and notify them of the new status.
/// Guest issues have no recipient and are skipped.
async fn notify_submitter(
    state: &AppState,
    issue_id: DbId,
    new_status: IssueStatus,
) -> Result<(), sqlx::Error> {
    let Some(issue) = IssueRepo::find_by_id(&state.pool, issue_id).await? else {
        // Raced with a delete; nothing to notify.
        return Ok(());
    };
    let Some(user_id) = issue.user_id else {
        return Ok(());
    };
    let Some(user) = UserRepo::find_by_id(&state.pool, user_id).await? else {
        return Ok(());
    };

    let (subject, body) = status_changed_message(&issue.title, new_status.display_name());
    state.notifier.dispatch(EmailMessage {
        to: vec![user.email],
        subject,
        body,
    });
    Ok(())
}

/// Compose the message sent to a department when an issue is created.
fn issue_created_message(
    title: &str,
    description: &str,
    submitter: &str,
    department: &str,
) -> (String, String) {
    let subject = format!("New issue reported: {title}");
    let body = format!(
        "A new issue has been reported to {department}.\n\n\
         Title: {title}\n\
         Description: {description}\n\
         Reported by: {submitter}\n"
    );
    (subject, body)
}

/// Compose the message sent to a submitter when their issue changes status.
fn status_changed_message(title: &str, status_name: &str) -> (String, String) {
    let subject = format!("Your issue is now {status_name}");
    let body = format!(
        "The status of your reported issue \"{title}\" has changed to {status_name}.\n"
    );
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_message_names_submitter_and_department() {
        let (subject, body) = issue_created_message(
            "Pothole on Main St",
            "Deep pothole near the crossing",
            "Jordan Lee",
            "Public Works",
        );
        assert_eq!(subject, "New issue reported: Pothole on Main St");
        assert!(body.contains("Public Works"));
        assert!(body.contains("Reported by: Jordan Lee"));
        assert!(body.contains("Deep pothole near the crossing"));
    }

    #[test]
    fn status_message_uses_display_name() {
        let (subject, body) =
            status_changed_message("Pothole on Main St", IssueStatus::InProgress.display_name());
        assert_eq!(subject, "Your issue is now In Progress");
        assert!(body.contains("\"Pothole on Main St\""));
        assert!(body.contains("In Progress"));
    }
}
