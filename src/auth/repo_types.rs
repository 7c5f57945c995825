use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Account classification. Drives the retirement projections on the
/// dashboard; stored as text (`employee`, `freelancer`, `business_owner`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum UserType {
    Employee,
    Freelancer,
    BusinessOwner,
}

/// User record in the database. The argon2 hash never leaves the backend;
/// clients see the `PublicUser` view instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub user_type: UserType,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

/// Consumption record for one password-reset attempt. A new row is minted
/// per request and flipped to `used` exactly once by a successful
/// redemption; rows are never deleted.
#[derive(Debug, Clone, FromRow)]
pub struct ResetTokenRecord {
    pub id: Uuid,
    pub email: String,
    pub token: String,
    pub created_at: OffsetDateTime,
    pub used: bool,
    pub used_at: Option<OffsetDateTime>,
}
