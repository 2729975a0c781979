//! Shared application state

use chrono_tz::Tz;
use shared::error::AppError;
use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::config::Config;
use crate::db::DbService;

/// State handed to every handler; cheap to clone
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    pub jwt: JwtService,
    /// Business timezone for reservation slot checks
    pub timezone: Tz,
    /// Refresh token lifetime in days
    pub refresh_ttl_days: i64,
}

impl AppState {
    /// Open the database from configuration and build the state
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url).await?;
        Ok(Self::with_pool(db.pool, config))
    }

    /// Build the state over an existing pool
    pub fn with_pool(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            jwt: JwtService::with_config(config.jwt.clone()),
            timezone: config.timezone,
            refresh_ttl_days: config.refresh_expiration_days,
        }
    }
}
