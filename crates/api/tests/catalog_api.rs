//! Integration tests for the reference catalogs and the admin approval
//! queue.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_empty, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn statuses_catalog_is_the_full_ordered_set(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/statuses").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let statuses = json["data"].as_array().unwrap();
    let names: Vec<_> = statuses
        .iter()
        .map(|s| (s["status_id"].as_i64().unwrap(), s["status_name"].as_str().unwrap()))
        .collect();
    assert_eq!(
        names,
        vec![
            (1, "Submitted"),
            (2, "In Progress"),
            (3, "Resolved"),
            (4, "Rejected"),
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_categories_and_departments_are_listed(pool: PgPool) {
    let app = common::build_test_app(pool);

    let categories = body_json(get(app.clone(), "/api/v1/categories").await).await;
    let names: Vec<_> = categories["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 5);
    assert!(names.contains(&"Roads".to_string()));

    let departments = body_json(get(app, "/api/v1/departments").await).await;
    let names: Vec<_> = departments["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"Public Works".to_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pending_approvals_lists_only_unapproved_staff(pool: PgPool) {
    let app = common::build_test_app(pool);

    // A citizen (auto-approved) never shows up in the queue.
    post_json(
        app.clone(),
        "/api/v1/signup",
        serde_json::json!({
            "full_name": "Casey Moran",
            "email": "casey@test.com",
            "password": "a-strong-password",
        }),
    )
    .await;

    let signup = post_json(
        app.clone(),
        "/api/v1/dept-signup",
        serde_json::json!({
            "full_name": "Dana Whitfield",
            "email": "dana@test.com",
            "password": "a-strong-password",
            "department_id": 1,
        }),
    )
    .await;
    assert_eq!(signup.status(), StatusCode::CREATED);

    let json = body_json(get(app.clone(), "/api/v1/admin/pending-approvals").await).await;
    let pending = json["data"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["full_name"], "Dana Whitfield");
    assert_eq!(pending[0]["role"], "department");
    assert_eq!(pending[0]["department_id"], 1);

    // Rejecting drops the account and empties the queue.
    let user_id = pending[0]["id"].as_i64().unwrap();
    let reject = delete(app.clone(), &format!("/api/v1/admin/reject/{user_id}")).await;
    assert_eq!(reject.status(), StatusCode::OK);

    let json = body_json(get(app.clone(), "/api/v1/admin/pending-approvals").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // The rejected account is gone, so its email no longer resolves.
    let login = post_json(
        app,
        "/api/v1/login",
        serde_json::json!({ "email": "dana@test.com", "password": "a-strong-password" }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approving_or_rejecting_unknown_user_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let approve = post_empty(app.clone(), "/api/v1/admin/approve/999999").await;
    assert_eq!(approve.status(), StatusCode::NOT_FOUND);

    let reject = delete(app, "/api/v1/admin/reject/999999").await;
    assert_eq!(reject.status(), StatusCode::NOT_FOUND);
}
