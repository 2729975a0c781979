//! Notification Repository

use shared::models::{NotificationResponse, PageRequest};
use shared::util::now_millis;
use sqlx::{SqliteExecutor, SqlitePool};

use super::RepoResult;

pub async fn create(
    executor: impl SqliteExecutor<'_>,
    user_id: i64,
    message: &str,
) -> RepoResult<i64> {
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO notifications (user_id, message, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?3) RETURNING notification_id",
    )
    .bind(user_id)
    .bind(message)
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

/// Newest first
pub async fn find_by_user(
    pool: &SqlitePool,
    user_id: i64,
    page: PageRequest,
) -> RepoResult<Vec<NotificationResponse>> {
    let notifications = sqlx::query_as::<_, NotificationResponse>(
        "SELECT notification_id, message, is_read AS read, created_at FROM notifications \
         WHERE user_id = ?1 AND status = 'AVAILABLE' \
         ORDER BY created_at DESC, notification_id DESC LIMIT ?2 OFFSET ?3",
    )
    .bind(user_id)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;
    Ok(notifications)
}

/// Returns false when the notification does not exist or belongs to someone else
pub async fn mark_read(pool: &SqlitePool, user_id: i64, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE notifications SET is_read = 1, updated_at = ?1 \
         WHERE notification_id = ?2 AND user_id = ?3 AND status = 'AVAILABLE'",
    )
    .bind(now_millis())
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Returns false when the notification does not exist or belongs to someone else
pub async fn soft_delete(pool: &SqlitePool, user_id: i64, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE notifications SET status = 'DELETED', updated_at = ?1 \
         WHERE notification_id = ?2 AND user_id = ?3 AND status = 'AVAILABLE'",
    )
    .bind(now_millis())
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
