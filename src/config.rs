use serde::Deserialize;

/// Settings for signing session tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub session: SessionConfig,
    pub host: String,
    pub port: u16,
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let session = SessionConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: var_or("JWT_ISSUER", "devrank"),
            audience: var_or("JWT_AUDIENCE", "devrank-users"),
            ttl_minutes: parsed_or("SESSION_TTL_MINUTES", 60 * 24 * 7),
        };
        Ok(Self {
            database_url,
            session,
            host: var_or("APP_HOST", "0.0.0.0"),
            port: parsed_or("APP_PORT", 8080),
        })
    }

    /// Configuration for running without a database, e.g. against
    /// [`MemoryUserStore`](crate::users::MemoryUserStore).
    pub fn local(secret: &str) -> Self {
        Self {
            database_url: String::new(),
            session: SessionConfig {
                secret: secret.into(),
                issuer: "devrank".into(),
                audience: "devrank-users".into(),
                ttl_minutes: 30,
            },
            host: "127.0.0.1".into(),
            port: 0,
        }
    }
}
