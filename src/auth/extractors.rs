use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::auth::error::AuthError;
use crate::auth::repo::CredentialStore;
use crate::auth::repo_types::User;
use crate::auth::tokens::JwtKeys;
use crate::state::AppState;

/// Resolves the bearer token on a protected request into the authenticated
/// user. Handlers downstream receive the full record and must not
/// re-verify credentials themselves.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError::InvalidCredential)?;

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or(AuthError::InvalidCredential)?;

        let keys = JwtKeys::from_ref(state);
        let user_id = keys.verify_session(token)?;

        // The subject may have been deleted after issuance; a signed token
        // alone is not an identity.
        let user = state
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or(AuthError::InvalidCredential)?;

        Ok(CurrentUser(user))
    }
}
