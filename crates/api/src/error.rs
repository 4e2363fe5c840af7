//! HTTP error surface.
//!
//! [`AppError`] is what handlers return. Domain faults arrive as
//! [`CoreError`] and keep their own messages; database faults are
//! classified here. Every response body has the same shape,
//! `{ "error": message, "code": CODE }`, and the code strings are part of
//! the API contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use civica_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level fault from `civica_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request outside the domain rules (bad multipart, bad
    /// query parameter).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An unexpected server-side failure. The message is logged, never
    /// returned to the client.
    #[error("internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// What a single error renders as on the wire.
struct Fault {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl Fault {
    fn internal() -> Self {
        Fault {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_ERROR",
            message: "An internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let fault = match &self {
            AppError::Core(core) => Fault {
                status: core_status(core),
                code: core_code(core),
                message: core.to_string(),
            },
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => Fault {
                status: StatusCode::BAD_REQUEST,
                code: "BAD_REQUEST",
                message: msg.clone(),
            },
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "internal error");
                Fault::internal()
            }
        };

        let body = json!({
            "error": fault.message,
            "code": fault.code,
        });
        (fault.status, axum::Json(body)).into_response()
    }
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        CoreError::Validation(_) => StatusCode::BAD_REQUEST,
        CoreError::Conflict(_) => StatusCode::CONFLICT,
        CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
    }
}

fn core_code(err: &CoreError) -> &'static str {
    match err {
        CoreError::NotFound { .. } => "NOT_FOUND",
        CoreError::Validation(_) => "VALIDATION_ERROR",
        CoreError::Conflict(_) => "CONFLICT",
        CoreError::Unauthorized(_) => "UNAUTHORIZED",
        CoreError::Forbidden(_) => "FORBIDDEN",
    }
}

/// Classify a sqlx error for the wire.
///
/// Unique violations (PostgreSQL code 23505, constraints named `uq_*` in
/// the schema) are caller-visible conflicts; everything else is an
/// internal fault whose detail stays in the log.
fn classify_sqlx_error(err: &sqlx::Error) -> Fault {
    match err {
        sqlx::Error::RowNotFound => Fault {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: "Resource not found".to_string(),
        },
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let message = match db_err.constraint() {
                Some("uq_users_email") => "An account with this email already exists".to_string(),
                Some(constraint) => format!("Duplicate value ({constraint})"),
                None => "Duplicate value".to_string(),
            };
            Fault {
                status: StatusCode::CONFLICT,
                code: "CONFLICT",
                message,
            }
        }
        other => {
            tracing::error!(error = %other, "database error");
            Fault::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civica_core::error::Entity;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn domain_faults_map_to_semantic_statuses() {
        assert_eq!(
            status_of(CoreError::not_found(Entity::Issue, 7).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CoreError::Validation("bad".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::Conflict("taken".into()).into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(CoreError::Unauthorized("no".into()).into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(CoreError::Forbidden("pending".into()).into()),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let response =
            AppError::InternalError("connection string was postgres://...".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_surfaces_as_400() {
        let response = AppError::BadRequest("unknown tab".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
