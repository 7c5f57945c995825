use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Retirement savings profile, one per user at most. Read-only in this
/// backend; maintained by onboarding/import tooling.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RetirementProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub current_age: i32,
    pub target_retirement_age: i32,
    pub monthly_income: f64,
    pub current_savings: f64,
    pub monthly_contributions: f64,
    pub estimated_pension: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}
