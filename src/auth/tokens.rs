use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::auth::error::AuthError;
use crate::config::JwtConfig;
use crate::state::AppState;

/// Fallback applied when a caller signs a session without an explicit ttl.
/// Every production call site passes the configured ttl, so this is only
/// reachable through direct codec use.
const FALLBACK_SESSION_TTL: Duration = Duration::minutes(15);

/// Claim set of a bearer session token: subject and expiry, nothing else.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub exp: usize,
}

/// Value of the `type` claim that namespaces reset tokens away from
/// session tokens.
const RESET_TOKEN_TYPE: &str = "reset";

/// Claim set of a password-reset token. Carries the target email instead of
/// a subject id; the disjoint shape and the `type` claim keep the two
/// codecs from ever cross-accepting each other's tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetClaims {
    pub email: String,
    pub exp: usize,
    #[serde(rename = "type")]
    pub token_type: String,
}

/// Symmetric signing material plus the configured ttls, shared by the
/// session and reset codecs.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    pub session_ttl: Duration,
    pub reset_ttl: Duration,
}

impl JwtKeys {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            session_ttl: Duration::minutes(config.session_ttl_minutes),
            reset_ttl: Duration::minutes(config.reset_ttl_minutes),
        }
    }

    /// Issue a session token for `user_id` expiring after `ttl`, or after
    /// the 15-minute fallback when none is given.
    pub fn sign_session(&self, user_id: Uuid, ttl: Option<Duration>) -> anyhow::Result<String> {
        let ttl = ttl.unwrap_or(FALLBACK_SESSION_TTL);
        let exp = OffsetDateTime::now_utc() + ttl;
        let claims = SessionClaims {
            sub: user_id,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "session token signed");
        Ok(token)
    }

    /// Decode and check a session token. Bad signature, malformed payload,
    /// missing subject and expiry all collapse into `InvalidCredential`.
    pub fn verify_session(&self, token: &str) -> Result<Uuid, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AuthError::InvalidCredential)?;
        debug!(user_id = %data.claims.sub, exp = data.claims.exp, "session token verified");
        Ok(data.claims.sub)
    }

    /// Issue a reset token bound to `email`, expiring after the configured
    /// reset ttl.
    pub fn sign_reset(&self, email: &str) -> anyhow::Result<String> {
        let exp = OffsetDateTime::now_utc() + self.reset_ttl;
        let claims = ResetClaims {
            email: email.to_string(),
            exp: exp.unix_timestamp() as usize,
            token_type: RESET_TOKEN_TYPE.to_string(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(email = %email, "reset token signed");
        Ok(token)
    }

    /// Decode a reset token, returning the email claim. Any failure (bad
    /// signature, expiry, wrong `type`, absent email) is `None`, never an
    /// error: the caller treats a bad token as caller input, not a fault.
    pub fn verify_reset(&self, token: &str) -> Option<String> {
        let data = decode::<ResetClaims>(token, &self.decoding, &Validation::default()).ok()?;
        if data.claims.token_type != RESET_TOKEN_TYPE {
            return None;
        }
        debug!(email = %data.claims.email, exp = data.claims.exp, "reset token verified");
        Some(data.claims.email)
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        JwtKeys::new(&state.config.jwt)
    }
}
