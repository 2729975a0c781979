//! Store Repository

use super::{RepoError, RepoResult, like_pattern};
use shared::models::{PageRequest, StoreCreateRequest, StoreInfoResponse, StoreUpdateRequest};
use shared::util::now_millis;
use sqlx::{SqliteExecutor, SqlitePool};

const RETURNING_INFO: &str = "RETURNING store_id, user_id AS registrant_id, name, address, description";

pub async fn create(
    pool: &SqlitePool,
    registrant_id: i64,
    data: &StoreCreateRequest,
) -> RepoResult<StoreInfoResponse> {
    let now = now_millis();
    let store = sqlx::query_as::<_, StoreInfoResponse>(&format!(
        "INSERT INTO stores (user_id, name, address, description, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?5) {RETURNING_INFO}"
    ))
    .bind(registrant_id)
    .bind(&data.name)
    .bind(&data.address)
    .bind(&data.description)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(store)
}

pub async fn find_by_id(
    executor: impl SqliteExecutor<'_>,
    id: i64,
) -> RepoResult<Option<StoreInfoResponse>> {
    let store = sqlx::query_as::<_, StoreInfoResponse>(
        "SELECT store_id, user_id AS registrant_id, name, address, description \
         FROM stores WHERE store_id = ? AND status = 'AVAILABLE'",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(store)
}

/// Stores whose name contains `query` (ASCII case-insensitive), in id order
pub async fn search(
    pool: &SqlitePool,
    query: Option<&str>,
    page: PageRequest,
) -> RepoResult<Vec<StoreInfoResponse>> {
    let pattern = like_pattern(query.unwrap_or_default());
    let stores = sqlx::query_as::<_, StoreInfoResponse>(
        "SELECT store_id, user_id AS registrant_id, name, address, description \
         FROM stores WHERE status = 'AVAILABLE' AND name LIKE ?1 ESCAPE '\\' \
         ORDER BY store_id LIMIT ?2 OFFSET ?3",
    )
    .bind(pattern)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;
    Ok(stores)
}

/// Partial update; `None` fields are left unchanged
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &StoreUpdateRequest,
) -> RepoResult<StoreInfoResponse> {
    let store = sqlx::query_as::<_, StoreInfoResponse>(&format!(
        "UPDATE stores SET name = COALESCE(?1, name), address = COALESCE(?2, address), \
         description = COALESCE(?3, description), updated_at = ?4 \
         WHERE store_id = ?5 AND status = 'AVAILABLE' {RETURNING_INFO}"
    ))
    .bind(data.name.as_deref())
    .bind(data.address.as_deref())
    .bind(data.description.as_deref())
    .bind(now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?;
    store.ok_or_else(|| RepoError::NotFound(format!("Store {id} not found")))
}

pub async fn soft_delete(executor: impl SqliteExecutor<'_>, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE stores SET status = 'DELETED', updated_at = ?1 WHERE store_id = ?2 AND status = 'AVAILABLE'",
    )
    .bind(now_millis())
    .bind(id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Soft delete every store a user registered
pub async fn soft_delete_by_registrant(
    executor: impl SqliteExecutor<'_>,
    registrant_id: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE stores SET status = 'DELETED', updated_at = ?1 WHERE user_id = ?2 AND status = 'AVAILABLE'",
    )
    .bind(now_millis())
    .bind(registrant_id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected())
}
