//! Menu Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuCreateRequest, MenuInfoResponse, MenuUpdateRequest};
use shared::util::now_millis;
use sqlx::{SqliteExecutor, SqlitePool};

pub async fn create(
    pool: &SqlitePool,
    store_id: i64,
    data: &MenuCreateRequest,
) -> RepoResult<MenuInfoResponse> {
    let now = now_millis();
    let menu = sqlx::query_as::<_, MenuInfoResponse>(
        "INSERT INTO menus (store_id, name, price, description, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?5) \
         RETURNING menu_id, store_id, name, price, description",
    )
    .bind(store_id)
    .bind(&data.name)
    .bind(data.price)
    .bind(&data.description)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(menu)
}

pub async fn find_by_id(
    executor: impl SqliteExecutor<'_>,
    id: i64,
) -> RepoResult<Option<MenuInfoResponse>> {
    let menu = sqlx::query_as::<_, MenuInfoResponse>(
        "SELECT menu_id, store_id, name, price, description FROM menus \
         WHERE menu_id = ? AND status = 'AVAILABLE'",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(menu)
}

/// Menus of a store in insertion order
pub async fn find_by_store(
    executor: impl SqliteExecutor<'_>,
    store_id: i64,
) -> RepoResult<Vec<MenuInfoResponse>> {
    let menus = sqlx::query_as::<_, MenuInfoResponse>(
        "SELECT menu_id, store_id, name, price, description FROM menus \
         WHERE store_id = ? AND status = 'AVAILABLE' ORDER BY menu_id",
    )
    .bind(store_id)
    .fetch_all(executor)
    .await?;
    Ok(menus)
}

/// Partial update; `None` fields are left unchanged
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &MenuUpdateRequest,
) -> RepoResult<MenuInfoResponse> {
    let menu = sqlx::query_as::<_, MenuInfoResponse>(
        "UPDATE menus SET name = COALESCE(?1, name), price = COALESCE(?2, price), \
         description = COALESCE(?3, description), updated_at = ?4 \
         WHERE menu_id = ?5 AND status = 'AVAILABLE' \
         RETURNING menu_id, store_id, name, price, description",
    )
    .bind(data.name.as_deref())
    .bind(data.price)
    .bind(data.description.as_deref())
    .bind(now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?;
    menu.ok_or_else(|| RepoError::NotFound(format!("Menu {id} not found")))
}

pub async fn soft_delete(executor: impl SqliteExecutor<'_>, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE menus SET status = 'DELETED', updated_at = ?1 WHERE menu_id = ?2 AND status = 'AVAILABLE'",
    )
    .bind(now_millis())
    .bind(id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Soft delete every menu of a store, returning how many were removed
pub async fn soft_delete_by_store(
    executor: impl SqliteExecutor<'_>,
    store_id: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE menus SET status = 'DELETED', updated_at = ?1 WHERE store_id = ?2 AND status = 'AVAILABLE'",
    )
    .bind(now_millis())
    .bind(store_id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected())
}

/// Soft delete the menus of every store a user registered
pub async fn soft_delete_by_registrant(
    executor: impl SqliteExecutor<'_>,
    registrant_id: i64,
) -> RepoResult<u64> {
    let rows = sqlx::query(
        "UPDATE menus SET status = 'DELETED', updated_at = ?1 \
         WHERE status = 'AVAILABLE' AND store_id IN (SELECT store_id FROM stores WHERE user_id = ?2)",
    )
    .bind(now_millis())
    .bind(registrant_id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected())
}
