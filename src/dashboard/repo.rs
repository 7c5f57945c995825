use sqlx::PgPool;
use uuid::Uuid;

use crate::dashboard::repo_types::RetirementProfile;

impl RetirementProfile {
    /// Find the profile belonging to a user.
    pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Self>> {
        let profile = sqlx::query_as::<_, RetirementProfile>(
            r#"
            SELECT id, user_id, current_age, target_retirement_age, monthly_income,
                   current_savings, monthly_contributions, estimated_pension, last_updated
            FROM retirement_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }
}
