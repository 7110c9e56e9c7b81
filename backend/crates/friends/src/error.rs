//! Friends Error Types
//!
//! Friend-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

use crate::domain::value_object::field_error::FieldError;

pub type FriendResult<T> = Result<T, FriendError>;

#[derive(Debug, Error)]
pub enum FriendError {
    /// Input failed a field constraint (first violation only)
    #[error("{0}")]
    Validation(#[from] FieldError),

    /// Body was not a JSON object (bad syntax, wrong content type)
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Lookup by email found nothing
    #[error("Could not find a friend with the given email")]
    NotFound,

    /// The store already holds a friend with this email
    #[error("A friend with this email already exists")]
    DuplicateEmail,

    /// Email/password pair did not verify. Raised by the HTTP layer only.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Hashing(#[from] PasswordHashError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FriendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FriendError::Validation(_) | FriendError::MalformedBody(_) => ErrorKind::BadRequest,
            FriendError::NotFound => ErrorKind::NotFound,
            FriendError::DuplicateEmail => ErrorKind::Conflict,
            FriendError::InvalidCredentials => ErrorKind::Unauthorized,
            FriendError::Database(e) => database_kind(e),
            FriendError::Hashing(_) | FriendError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the source chain; the message is generic.
    pub fn into_app_error(self) -> AppError {
        let kind = self.kind();
        match self {
            FriendError::Database(e) => AppError::from(e),
            FriendError::Hashing(e) => AppError::internal("Password processing failed").with_source(e),
            FriendError::Internal(_) => AppError::internal("Internal server error"),
            FriendError::Validation(field) => {
                AppError::new(kind, field.to_string()).with_action(field.action())
            }
            other => AppError::new(kind, other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            FriendError::Database(e) => {
                tracing::error!(error = %e, "Friends database error");
            }
            FriendError::Hashing(e) => {
                tracing::error!(error = %e, "Friends password hashing error");
            }
            FriendError::Internal(msg) => {
                tracing::error!(message = %msg, "Friends internal error");
            }
            FriendError::InvalidCredentials => {
                tracing::warn!("Invalid credential check");
            }
            _ => {
                tracing::debug!(error = %self, "Friends error");
            }
        }
    }
}

impl IntoResponse for FriendError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for FriendError {
    fn from(rejection: JsonRejection) -> Self {
        FriendError::MalformedBody(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for FriendError {
    fn from(err: tokio::task::JoinError) -> Self {
        FriendError::Internal(format!("Blocking task failed: {}", err))
    }
}

/// Mirrors the classification of `kernel`'s sqlx conversion
fn database_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => ErrorKind::ServiceUnavailable,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ErrorKind::Conflict,
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(FriendError, StatusCode)> = vec![
            (
                FriendError::Validation(FieldError::TooShort {
                    field: "firstName",
                    min: 2,
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                FriendError::MalformedBody("expected value".into()),
                StatusCode::BAD_REQUEST,
            ),
            (FriendError::NotFound, StatusCode::NOT_FOUND),
            (FriendError::DuplicateEmail, StatusCode::CONFLICT),
            (FriendError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                FriendError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                FriendError::Hashing(PasswordHashError::InvalidHashFormat),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                FriendError::Internal("no id".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_validation_message_is_the_field_error() {
        let err = FriendError::from(FieldError::InvalidEmail);
        assert_eq!(err.to_string(), r#""email" must be a valid email"#);

        let app_err = err.into_app_error();
        assert_eq!(app_err.message(), r#""email" must be a valid email"#);
        assert!(app_err.action().is_some());
    }

    #[test]
    fn test_internal_details_not_exposed() {
        let app_err = FriendError::Internal("secret detail".into()).into_app_error();
        assert!(!app_err.message().contains("secret detail"));
    }
}
