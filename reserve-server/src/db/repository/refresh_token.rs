//! Refresh token storage
//!
//! Tokens are opaque UUIDs. Using one revokes it and issues a successor.

use shared::util::now_millis;
use sqlx::{SqliteExecutor, SqlitePool};

use super::RepoResult;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Issue a new refresh token for a user
pub async fn create(
    executor: impl SqliteExecutor<'_>,
    user_id: i64,
    ttl_days: i64,
) -> RepoResult<String> {
    let token = uuid::Uuid::new_v4().to_string();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO refresh_tokens (id, user_id, expires_at, created_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&token)
    .bind(user_id)
    .bind(now + ttl_days * DAY_MS)
    .bind(now)
    .execute(executor)
    .await?;

    Ok(token)
}

/// Validate and rotate a refresh token. Returns `(user_id, new_refresh_token)`,
/// or `None` if the token is unknown, expired or already used.
pub async fn rotate(
    pool: &SqlitePool,
    refresh_token: &str,
    ttl_days: i64,
) -> RepoResult<Option<(i64, String)>> {
    let mut tx = pool.begin().await?;

    // Revoke and read in one statement so a token can be used once
    let user_id = sqlx::query_scalar::<_, i64>(
        "UPDATE refresh_tokens SET revoked = 1 \
         WHERE id = ?1 AND revoked = 0 AND expires_at > ?2 RETURNING user_id",
    )
    .bind(refresh_token)
    .bind(now_millis())
    .fetch_optional(&mut *tx)
    .await?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let new_token = create(&mut *tx, user_id, ttl_days).await?;
    tx.commit().await?;

    Ok(Some((user_id, new_token)))
}

/// Revoke all refresh tokens of a user
pub async fn revoke_all(executor: impl SqliteExecutor<'_>, user_id: i64) -> RepoResult<u64> {
    let rows =
        sqlx::query("UPDATE refresh_tokens SET revoked = 1 WHERE user_id = ? AND revoked = 0")
            .bind(user_id)
            .execute(executor)
            .await?;
    Ok(rows.rows_affected())
}
