use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub session_ttl_minutes: i64,
    pub reset_ttl_minutes: i64,
}

/// Where reset links point and whether the raw link is echoed back in the
/// forgot-password response. Echoing is a prototype convenience; production
/// deployments must set `RESET_LINK_IN_RESPONSE=false` and deliver the link
/// out of band only.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetConfig {
    pub link_base_url: String,
    pub expose_link: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub reset: ResetConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            session_ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
            reset_ttl_minutes: std::env::var("RESET_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let reset = ResetConfig {
            link_base_url: std::env::var("RESET_LINK_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            expose_link: std::env::var("RESET_LINK_IN_RESPONSE")
                .map(|v| v != "false")
                .unwrap_or(true),
        };
        Ok(Self {
            database_url,
            jwt,
            reset,
        })
    }
}
