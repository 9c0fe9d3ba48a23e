use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let url = match std::env::var("DATABASE_URL") {
            Ok(u) => u,
            // Deployments may provide discrete DB_* variables instead of a URL.
            Err(_) => {
                let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
                let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into());
                let password = std::env::var("DB_PASSWORD").unwrap_or_default();
                let name = std::env::var("DB_NAME").unwrap_or_else(|_| "geolookup".into());
                format!("postgres://{user}:{password}@{host}/{name}")
            }
        };

        let database = DatabaseConfig {
            url,
            max_connections: std::env::var("DB_CONNECTION_LIMIT")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(10),
            acquire_timeout_secs: std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5),
        };

        // No sane default for the signing secret; refuse to start without one.
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24),
        };

        Ok(Self {
            database,
            jwt,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8000),
        })
    }
}
