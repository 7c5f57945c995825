use async_trait::async_trait;
use tracing::info;

/// Out-of-band delivery of reset links. The backend never depends on how
/// the link reaches the account owner; deployments inject an SMTP or SMS
/// implementation here.
#[async_trait]
pub trait ResetMailer: Send + Sync {
    async fn send_reset_link(&self, email: &str, link: &str) -> anyhow::Result<()>;
}

/// Development delivery: write the link to the log and nothing else.
pub struct LogMailer;

#[async_trait]
impl ResetMailer for LogMailer {
    async fn send_reset_link(&self, email: &str, link: &str) -> anyhow::Result<()> {
        info!(email = %email, link = %link, "password reset link issued");
        Ok(())
    }
}
