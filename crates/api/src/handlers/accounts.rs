//! Handlers for account workflows: citizen signup, department-staff
//! signup, and login.
//!
//! No tokens or sessions are issued: identity is passed as a plain user id
//! on subsequent requests, so login only verifies credentials and returns
//! the user summary.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use civica_core::error::{CoreError, Entity};
use civica_core::roles::{ROLE_CITIZEN, ROLE_DEPARTMENT};
use civica_core::types::DbId;
use civica_db::models::user::CreateUser;
use civica_db::repositories::{DepartmentRepo, RoleRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

/// Request body for `POST /dept-signup`.
#[derive(Debug, Deserialize)]
pub struct DeptSignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub department_id: DbId,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public user summary returned by signup and login.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    /// Resolved role name (e.g. `"citizen"`, `"department"`).
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/signup
///
/// Citizen signup. Citizens are auto-approved.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<UserSummary>)> {
    validate_signup_fields(&input.full_name, &input.email, &input.password)?;
    ensure_email_available(&state, &input.email).await?;
    let role = resolve_role(&state, ROLE_CITIZEN).await?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            full_name: input.full_name,
            email: input.email,
            phone: input.phone,
            password_hash,
            role_id: role.id,
            department_id: None,
            is_approved: true,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserSummary {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: role.name,
            department_id: None,
        }),
    ))
}

/// POST /api/v1/dept-signup
///
/// Department-staff signup. The account stays unapproved (and cannot log
/// in) until an admin approves it, so no credentials are returned.
pub async fn dept_signup(
    State(state): State<AppState>,
    Json(input): Json<DeptSignupRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_signup_fields(&input.full_name, &input.email, &input.password)?;
    ensure_email_available(&state, &input.email).await?;

    if DepartmentRepo::find_by_id(&state.pool, input.department_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::not_found(
            Entity::Department,
            input.department_id,
        )));
    }

    let role = resolve_role(&state, ROLE_DEPARTMENT).await?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::create(
        &state.pool,
        &CreateUser {
            full_name: input.full_name,
            email: input.email,
            phone: None,
            password_hash,
            role_id: role.id,
            department_id: Some(input.department_id),
            is_approved: false,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "ok": true,
            "message": "Signup received. An administrator must approve the account before login.",
        })),
    ))
}

/// POST /api/v1/login
///
/// Verify credentials and return the user summary. An unknown email is a
/// distinct 404 (no account to authenticate against); a wrong password
/// for an existing account is 401. An unapproved department account is
/// rejected even with correct credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<UserSummary>> {
    // 1. Find user by email.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: Entity::User,
                key: format!("email {}", input.email),
            })
        })?;

    // 2. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    // 3. Resolve role and enforce the approval gate for department staff.
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    if role == ROLE_DEPARTMENT && !user.is_approved {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is pending administrator approval".into(),
        )));
    }

    Ok(Json(UserSummary {
        id: user.id,
        full_name: user.full_name,
        email: user.email,
        role,
        department_id: user.department_id,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_signup_fields(full_name: &str, email: &str, password: &str) -> AppResult<()> {
    if full_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "full_name must not be empty".into(),
        )));
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "email must be a valid address".into(),
        )));
    }
    if password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "password must not be empty".into(),
        )));
    }
    Ok(())
}

async fn ensure_email_available(state: &AppState, email: &str) -> AppResult<()> {
    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }
    Ok(())
}

/// Look up a seeded role by name. Missing roles indicate a broken
/// deployment, not bad input.
async fn resolve_role(
    state: &AppState,
    name: &'static str,
) -> AppResult<civica_db::models::role::Role> {
    RoleRepo::find_by_name(&state.pool, name)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("role catalog is missing '{name}'")))
}
