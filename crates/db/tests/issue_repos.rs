//! Integration tests for the issue lifecycle repositories.
//!
//! Exercises the repository layer against a real database:
//! - Issue creation defaults (status always Submitted)
//! - History append order and latest-entry lookup
//! - Image insertion order
//! - Department tab partition (exhaustive and disjoint)

use civica_core::{DepartmentTab, IssueStatus};
use civica_db::models::issue::CreateIssue;
use civica_db::models::issue_history::CreateIssueHistoryEntry;
use civica_db::repositories::{IssueHistoryRepo, IssueImageRepo, IssueRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seeded reference IDs from the initial migration (first category and
/// first department inserted).
const CATEGORY_ID: i64 = 1;
const DEPARTMENT_ID: i64 = 1;

fn new_issue(title: &str) -> CreateIssue {
    CreateIssue {
        title: title.to_string(),
        description: "description".to_string(),
        category_id: CATEGORY_ID,
        department_id: DEPARTMENT_ID,
        location_id: 1,
        user_id: None,
    }
}

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_issue_starts_submitted(pool: PgPool) {
    let issue = IssueRepo::create(&pool, &new_issue("Pothole"))
        .await
        .expect("issue creation should succeed");

    assert_eq!(issue.status(), Some(IssueStatus::Submitted));
    assert_eq!(issue.title, "Pothole");
    assert!(issue.user_id.is_none(), "guest issue has no submitter");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_is_unconditional(pool: PgPool) {
    let issue = IssueRepo::create(&pool, &new_issue("Streetlight out"))
        .await
        .unwrap();

    // Any status may follow any status, including reopening a closed issue.
    for status in [
        IssueStatus::Resolved,
        IssueStatus::InProgress,
        IssueStatus::Rejected,
        IssueStatus::Submitted,
    ] {
        let updated = IssueRepo::update_status(&pool, issue.id, status)
            .await
            .unwrap();
        assert!(updated);

        let current = IssueRepo::find_by_id(&pool, issue.id).await.unwrap().unwrap();
        assert_eq!(current.status(), Some(status));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_missing_issue_returns_false(pool: PgPool) {
    let updated = IssueRepo::update_status(&pool, 9999, IssueStatus::Resolved)
        .await
        .unwrap();
    assert!(!updated);
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn history_appends_in_order(pool: PgPool) {
    let issue = IssueRepo::create(&pool, &new_issue("Overflowing bin")).await.unwrap();

    for (status, remark) in [
        (IssueStatus::Submitted, "Issue submitted by citizen"),
        (IssueStatus::InProgress, "Crew dispatched"),
        (IssueStatus::Resolved, "Bin emptied"),
    ] {
        IssueHistoryRepo::create(
            &pool,
            &CreateIssueHistoryEntry {
                issue_id: issue.id,
                status_id: status.id(),
                updated_by: None,
                remarks: remark.to_string(),
            },
        )
        .await
        .unwrap();
    }

    let entries = IssueHistoryRepo::list_for_issue(&pool, issue.id).await.unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].remarks, "Issue submitted by citizen");
    assert_eq!(entries[2].status_id, IssueStatus::Resolved.id());

    let latest = IssueHistoryRepo::latest_for_issue(&pool, issue.id)
        .await
        .unwrap()
        .expect("history must not be empty");
    assert_eq!(latest.status_id, IssueStatus::Resolved.id());
    assert_eq!(latest.remarks, "Bin emptied");
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn images_preserve_upload_order(pool: PgPool) {
    let issue = IssueRepo::create(&pool, &new_issue("Broken swing")).await.unwrap();

    let urls = ["http://blob/one.jpg", "http://blob/two.jpg", "http://blob/one.jpg"];
    for url in urls {
        IssueImageRepo::create(&pool, issue.id, url).await.unwrap();
    }

    let images = IssueImageRepo::list_for_issue(&pool, issue.id).await.unwrap();
    // Order preserved, no dedup.
    let got: Vec<_> = images.iter().map(|i| i.image_url.as_str()).collect();
    assert_eq!(got, urls);
}

// ---------------------------------------------------------------------------
// Department tabs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn department_tabs_partition_issues(pool: PgPool) {
    let mut ids = Vec::new();
    for (title, status) in [
        ("a", IssueStatus::Submitted),
        ("b", IssueStatus::InProgress),
        ("c", IssueStatus::Resolved),
        ("d", IssueStatus::Rejected),
        ("e", IssueStatus::Resolved),
    ] {
        let issue = IssueRepo::create(&pool, &new_issue(title)).await.unwrap();
        IssueRepo::update_status(&pool, issue.id, status).await.unwrap();
        ids.push(issue.id);
    }

    let active = IssueRepo::list_by_department(&pool, DEPARTMENT_ID, DepartmentTab::Active)
        .await
        .unwrap();
    let resolved = IssueRepo::list_by_department(&pool, DEPARTMENT_ID, DepartmentTab::Resolved)
        .await
        .unwrap();
    let rejected = IssueRepo::list_by_department(&pool, DEPARTMENT_ID, DepartmentTab::Rejected)
        .await
        .unwrap();

    assert_eq!(active.len(), 2);
    assert_eq!(resolved.len(), 2);
    assert_eq!(rejected.len(), 1);

    // Exhaustive: the three tabs cover every issue exactly once.
    let mut all: Vec<_> = active
        .iter()
        .chain(resolved.iter())
        .chain(rejected.iter())
        .map(|i| i.id)
        .collect();
    all.sort_unstable();
    let mut expected = ids.clone();
    expected.sort_unstable();
    assert_eq!(all, expected);

    // Active never contains a closed status.
    assert!(active.iter().all(|i| !i.status().unwrap().is_closed()));
}
