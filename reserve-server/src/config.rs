//! Server configuration

use chrono_tz::Tz;

use crate::auth::JwtConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
///
/// | Variable | Default |
/// |----------|---------|
/// | ENVIRONMENT | development |
/// | DATABASE_URL | sqlite:reserve.db |
/// | HTTP_PORT | 8080 |
/// | TIMEZONE | UTC |
/// | JWT_SECRET | required outside development |
/// | JWT_ISSUER | reserve-server |
/// | JWT_AUDIENCE | reserve-clients |
/// | JWT_ACCESS_EXPIRATION_MINUTES | 60 |
/// | JWT_REFRESH_EXPIRATION_DAYS | 30 |
/// | LOG_LEVEL | info |
/// | LOG_DIR | (stdout only) |
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment: development | staging | production
    pub environment: String,
    /// SQLite connection URL
    pub database_url: String,
    pub http_port: u16,
    /// Business timezone used to decide whether a reservation slot is in the past
    pub timezone: Tz,
    pub jwt: JwtConfig,
    /// Refresh token lifetime in days
    pub refresh_expiration_days: i64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production-use-only")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let timezone = match std::env::var("TIMEZONE") {
            Ok(tz) => tz
                .parse::<Tz>()
                .map_err(|e| format!("Invalid TIMEZONE {tz}: {e}"))?,
            Err(_) => Tz::UTC,
        };

        let secret = Self::require_secret("JWT_SECRET", &environment)?;
        if environment != "development" && secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".into());
        }

        let jwt = JwtConfig {
            secret,
            expiration_minutes: std::env::var("JWT_ACCESS_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "reserve-server".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "reserve-clients".into()),
        };

        Ok(Self {
            environment: environment.clone(),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:reserve.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            timezone,
            jwt,
            refresh_expiration_days: std::env::var("JWT_REFRESH_EXPIRATION_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        })
    }
}
