use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth::dto::{
    ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest, TokenResponse,
};
use crate::auth::error::AuthError;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo::CredentialStore;
use crate::auth::repo_types::User;
use crate::auth::tokens::JwtKeys;
use crate::mailer::ResetMailer;
use crate::state::AppState;

/// Identical for known and unknown addresses; the response must not reveal
/// whether an account exists.
const RESET_CONFIRMATION: &str =
    "If this email address is registered, you will receive a password reset link.";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/forgot-password", post(forgot_password))
        .route("/auth/reset-password", post(reset_password))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(AuthError::InvalidEmail);
    }

    let hash = hash_password(&payload.password)?;
    let user = User {
        id: Uuid::new_v4(),
        email: payload.email,
        password_hash: hash,
        full_name: payload.full_name,
        user_type: payload.user_type,
        is_active: true,
        created_at: OffsetDateTime::now_utc(),
    };
    state.store.insert_user(&user).await?;

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_session(user.id, Some(keys.session_ttl))?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(TokenResponse::bearer(access_token, user.into())))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    let user = match state.store.find_user_by_email(&payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(AuthError::InvalidCredential);
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(AuthError::InvalidCredential);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_session(user.id, Some(keys.session_ttl))?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(TokenResponse::bearer(access_token, user.into())))
}

#[instrument(skip(state, payload))]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<ForgotPasswordResponse>, AuthError> {
    let user = match state.store.find_user_by_email(&payload.email).await? {
        Some(u) => u,
        None => {
            // No token minted; the confirmation reads the same either way.
            return Ok(Json(ForgotPasswordResponse {
                message: RESET_CONFIRMATION.to_string(),
                reset_link: None,
            }));
        }
    };

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign_reset(&user.email)?;
    let link = format!(
        "{}/reset-password?token={}",
        state.config.reset.link_base_url, token
    );

    state
        .store
        .insert_reset_record(&user.email, &token, OffsetDateTime::now_utc())
        .await?;

    // A delivery failure must not change the response, or it becomes an
    // account-existence oracle.
    if let Err(e) = state.mailer.send_reset_link(&user.email, &link).await {
        warn!(error = %e, "reset link delivery failed");
    }

    info!(user_id = %user.id, "reset token issued");
    let reset_link = state.config.reset.expose_link.then_some(link);
    Ok(Json(ForgotPasswordResponse {
        message: RESET_CONFIRMATION.to_string(),
        reset_link,
    }))
}

#[instrument(skip(state, payload))]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    let keys = JwtKeys::from_ref(&state);
    let email = keys
        .verify_reset(&payload.token)
        .ok_or(AuthError::InvalidOrExpiredToken)?;

    // Consumption check is separate from signature/expiry: a valid token
    // whose record was already redeemed is still refused.
    let record = state
        .store
        .find_unused_reset_record(&payload.token)
        .await?
        .ok_or(AuthError::TokenAlreadyUsed)?;

    let new_hash = hash_password(&payload.new_password)?;

    // The credential update must be confirmed before the record is
    // consumed; a crash between the two steps leaves the token redeemable
    // instead of silently dropping the new password.
    if !state.store.update_password_hash(&email, &new_hash).await? {
        return Err(AuthError::UpdateFailed);
    }

    if !state
        .store
        .mark_reset_record_used(&payload.token, OffsetDateTime::now_utc())
        .await?
    {
        warn!("redeemed reset record missing at mark-used step");
    }

    info!(email = %email, record_id = %record.id, "password reset");
    Ok(Json(MessageResponse {
        message: "Password reset successfully".to_string(),
    }))
}
