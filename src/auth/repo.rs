use axum::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::error::AuthError;
use crate::auth::repo_types::{ResetTokenRecord, User};

/// Durable state behind the credential lifecycle. Every operation is
/// single-row atomic; no call spans more than one user or reset record.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError>;

    /// Fails with `DuplicateEmail` when the email is already present.
    /// Uniqueness is enforced at insert time by the store itself, so two
    /// racing registrations cannot both succeed.
    async fn insert_user(&self, user: &User) -> Result<(), AuthError>;

    /// False when no user matches `email`.
    async fn update_password_hash(&self, email: &str, new_hash: &str) -> Result<bool, AuthError>;

    async fn insert_reset_record(
        &self,
        email: &str,
        token: &str,
        created_at: OffsetDateTime,
    ) -> Result<(), AuthError>;

    /// Lookup by exact token string, restricted to records not yet consumed.
    async fn find_unused_reset_record(
        &self,
        token: &str,
    ) -> Result<Option<ResetTokenRecord>, AuthError>;

    /// False when no record matches `token`.
    async fn mark_reset_record_used(
        &self,
        token: &str,
        used_at: OffsetDateTime,
    ) -> Result<bool, AuthError>;
}

pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, user_type, is_active, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, user_type, is_active, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert_user(&self, user: &User) -> Result<(), AuthError> {
        // The unique index on email turns the racing second insert into a
        // unique violation, surfaced as DuplicateEmail.
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, full_name, user_type, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.user_type)
        .bind(user.is_active)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_password_hash(&self, email: &str, new_hash: &str) -> Result<bool, AuthError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET password_hash = $2 WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(new_hash)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_reset_record(
        &self,
        email: &str,
        token: &str,
        created_at: OffsetDateTime,
    ) -> Result<(), AuthError> {
        sqlx::query(
            r#"
            INSERT INTO password_resets (id, email, token, created_at, used)
            VALUES ($1, $2, $3, $4, FALSE)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(token)
        .bind(created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_unused_reset_record(
        &self,
        token: &str,
    ) -> Result<Option<ResetTokenRecord>, AuthError> {
        let record = sqlx::query_as::<_, ResetTokenRecord>(
            r#"
            SELECT id, email, token, created_at, used, used_at
            FROM password_resets
            WHERE token = $1 AND used = FALSE
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn mark_reset_record_used(
        &self,
        token: &str,
        used_at: OffsetDateTime,
    ) -> Result<bool, AuthError> {
        let result = sqlx::query(
            r#"
            UPDATE password_resets SET used = TRUE, used_at = $2 WHERE token = $1
            "#,
        )
        .bind(token)
        .bind(used_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::auth::repo_types::UserType;

    fn sample_user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            full_name: "Sample".to_string(),
            user_type: UserType::Employee,
            is_active: true,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = MemoryStore::default();
        store.insert_user(&sample_user("a@example.com")).await.unwrap();
        let err = store
            .insert_user(&sample_user("a@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
    }

    #[tokio::test]
    async fn used_record_no_longer_matches_unused_lookup() {
        let store = MemoryStore::default();
        let now = OffsetDateTime::now_utc();
        store
            .insert_reset_record("a@example.com", "tok-1", now)
            .await
            .unwrap();
        let record = store
            .find_unused_reset_record("tok-1")
            .await
            .unwrap()
            .expect("freshly minted record is unused");
        assert_eq!(record.email, "a@example.com");
        assert_eq!(record.token, "tok-1");
        assert_eq!(record.created_at, now);
        assert!(!record.used);
        assert!(record.used_at.is_none());

        assert!(store.mark_reset_record_used("tok-1", now).await.unwrap());
        assert!(store.find_unused_reset_record("tok-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn marking_unknown_token_reports_false() {
        let store = MemoryStore::default();
        let marked = store
            .mark_reset_record_used("missing", OffsetDateTime::now_utc())
            .await
            .unwrap();
        assert!(!marked);
    }

    #[tokio::test]
    async fn update_hash_reports_missing_user() {
        let store = MemoryStore::default();
        assert!(!store.update_password_hash("ghost@example.com", "h").await.unwrap());
    }
}
