use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failure taxonomy for the credential lifecycle. Every variant maps to a
/// caller-facing status; nothing here is retried.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateEmail,

    /// Covers login failure and session-verification failure alike so the
    /// response never distinguishes "unknown user" from "wrong password".
    #[error("Incorrect email or password")]
    InvalidCredential,

    #[error("Invalid email address")]
    InvalidEmail,

    /// Generic wording: the caller cannot tell forgery from expiry.
    #[error("Invalid or expired reset token")]
    InvalidOrExpiredToken,

    /// Generic wording: the caller cannot tell reuse from forgery.
    #[error("Invalid or already used reset token")]
    TokenAlreadyUsed,

    #[error("Could not update password")]
    UpdateFailed,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    fn status(&self) -> StatusCode {
        match self {
            AuthError::DuplicateEmail
            | AuthError::InvalidEmail
            | AuthError::InvalidOrExpiredToken
            | AuthError::TokenAlreadyUsed
            | AuthError::UpdateFailed => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredential => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return AuthError::DuplicateEmail;
            }
        }
        AuthError::Internal(e.into())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AuthError::Internal(e) => {
                error!(error = %e, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let mut response = (status, Json(json!({ "error": message }))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
