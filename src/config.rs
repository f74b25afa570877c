use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    /// When true, every todo operation resolves the parent list's owner.
    /// When false, todos are addressed by id alone (legacy behavior where
    /// any authenticated user could touch any todo by guessing its id).
    pub scope_todos_to_owner: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let scope_todos_to_owner = std::env::var("SCOPE_TODOS_TO_OWNER")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        Ok(Self {
            database_url,
            jwt,
            scope_todos_to_owner,
        })
    }
}
