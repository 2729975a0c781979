//! User Repository

use super::{RepoError, RepoResult};
use crate::db::models::UserCredentials;
use shared::models::UserInfoResponse;
use shared::util::now_millis;
use sqlx::{SqliteExecutor, SqlitePool};

const SELECT_INFO: &str = "SELECT user_id, username, nickname, description FROM users";

pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    nickname: &str,
    description: &str,
) -> RepoResult<i64> {
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, password_hash, nickname, description, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING user_id",
    )
    .bind(username)
    .bind(password_hash)
    .bind(nickname)
    .bind(description)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn find_by_id(
    executor: impl SqliteExecutor<'_>,
    id: i64,
) -> RepoResult<Option<UserInfoResponse>> {
    let user = sqlx::query_as::<_, UserInfoResponse>(&format!(
        "{SELECT_INFO} WHERE user_id = ? AND status = 'AVAILABLE'"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(user)
}

/// Whether the user exists and has not been deleted
pub async fn is_available(executor: impl SqliteExecutor<'_>, id: i64) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, i64>(
        "SELECT 1 FROM users WHERE user_id = ? AND status = 'AVAILABLE'",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(found.is_some())
}

pub async fn find_credentials_by_username(
    pool: &SqlitePool,
    username: &str,
) -> RepoResult<Option<UserCredentials>> {
    let user = sqlx::query_as::<_, UserCredentials>(
        "SELECT user_id, username, password_hash FROM users WHERE username = ? AND status = 'AVAILABLE'",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_credentials_by_id(
    pool: &SqlitePool,
    id: i64,
) -> RepoResult<Option<UserCredentials>> {
    let user = sqlx::query_as::<_, UserCredentials>(
        "SELECT user_id, username, password_hash FROM users WHERE user_id = ? AND status = 'AVAILABLE'",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Update nickname/description; `None` fields are left unchanged
pub async fn update_profile(
    pool: &SqlitePool,
    id: i64,
    nickname: Option<&str>,
    description: Option<&str>,
) -> RepoResult<UserInfoResponse> {
    let user = sqlx::query_as::<_, UserInfoResponse>(
        "UPDATE users SET nickname = COALESCE(?1, nickname), description = COALESCE(?2, description), \
         updated_at = ?3 WHERE user_id = ?4 AND status = 'AVAILABLE' \
         RETURNING user_id, username, nickname, description",
    )
    .bind(nickname)
    .bind(description)
    .bind(now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?;
    user.ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

pub async fn update_password(pool: &SqlitePool, id: i64, password_hash: &str) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE users SET password_hash = ?1, updated_at = ?2 WHERE user_id = ?3 AND status = 'AVAILABLE'",
    )
    .bind(password_hash)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    Ok(())
}

/// Soft delete; frees the username for new sign-ups
pub async fn soft_delete(executor: impl SqliteExecutor<'_>, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE users SET status = 'DELETED', updated_at = ?1 WHERE user_id = ?2 AND status = 'AVAILABLE'",
    )
    .bind(now_millis())
    .bind(id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected() > 0)
}
