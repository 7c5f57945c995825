use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::{User, UserType};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: UserType,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for requesting a password reset.
#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Request body for redeeming a reset token.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Public part of the user returned to the client; never the hash.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub user_type: UserType,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub is_active: bool,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            user_type: user.user_type,
            created_at: user.created_at,
            is_active: user.is_active,
        }
    }
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: PublicUser,
}

impl TokenResponse {
    pub fn bearer(access_token: String, user: PublicUser) -> Self {
        Self {
            access_token,
            token_type: "bearer",
            user,
        }
    }
}

/// Response for forgot-password. `reset_link` is only populated when the
/// deployment exposes it (prototype visibility); the field is omitted from
/// JSON otherwise so unknown and known emails serialize identically.
#[derive(Debug, Serialize)]
pub struct ForgotPasswordResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_public_user() -> PublicUser {
        PublicUser {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            full_name: "Test User".to_string(),
            user_type: UserType::Freelancer,
            created_at: OffsetDateTime::now_utc(),
            is_active: true,
        }
    }

    #[test]
    fn token_response_serialization() {
        let response = TokenResponse::bearer("abc".into(), sample_public_user());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["user"]["email"], "test@example.com");
        assert_eq!(json["user"]["user_type"], "freelancer");
        assert!(json["user"]["password_hash"].is_null());
    }

    #[test]
    fn reset_link_omitted_when_absent() {
        let response = ForgotPasswordResponse {
            message: "ok".into(),
            reset_link: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("reset_link").is_none());
    }

    #[test]
    fn user_type_wire_format_is_snake_case() {
        assert_eq!(
            serde_json::to_value(UserType::BusinessOwner).unwrap(),
            "business_owner"
        );
    }
}
