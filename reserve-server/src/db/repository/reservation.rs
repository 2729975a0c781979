//! Reservation Repository
//!
//! Reads join `stores` to carry the registrant, so authorization can be
//! decided from a single row. Reservations stay readable after their store
//! is deleted.

use chrono::NaiveDate;
use shared::models::{PageRequest, SearchType};
use shared::util::now_millis;
use sqlx::{SqliteExecutor, SqlitePool};

use super::{RepoResult, like_pattern};
use crate::db::models::Reservation;

const SELECT_JOINED: &str = "SELECT r.reservation_id, r.store_id, s.name AS store_name, r.user_id, \
     s.user_id AS registrant_id, r.date, r.hour \
     FROM reservations r JOIN stores s ON s.store_id = r.store_id";

pub async fn create(
    executor: impl SqliteExecutor<'_>,
    user_id: i64,
    store_id: i64,
    date: NaiveDate,
    hour: i32,
) -> RepoResult<i64> {
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO reservations (user_id, store_id, date, hour, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING reservation_id",
    )
    .bind(user_id)
    .bind(store_id)
    .bind(date)
    .bind(hour)
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

pub async fn find_by_id(
    executor: impl SqliteExecutor<'_>,
    id: i64,
) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "{SELECT_JOINED} WHERE r.reservation_id = ? AND r.status = 'AVAILABLE'"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(reservation)
}

/// Search filters, already validated by the handler
#[derive(Debug, Clone, Default)]
pub struct SearchFilter<'a> {
    /// Substring of the store name
    pub store_name: Option<&'a str>,
    pub date: Option<NaiveDate>,
}

/// Reservations visible to `user_id` from one side, ordered by date, hour, id
pub async fn search(
    pool: &SqlitePool,
    user_id: i64,
    search_type: SearchType,
    filter: SearchFilter<'_>,
    page: PageRequest,
) -> RepoResult<Vec<Reservation>> {
    let owner_column = match search_type {
        SearchType::Customer => "r.user_id",
        SearchType::Registrant => "s.user_id",
    };
    let sql = format!(
        "{SELECT_JOINED} WHERE r.status = 'AVAILABLE' AND {owner_column} = ?1 \
         AND s.name LIKE ?2 ESCAPE '\\' AND (?3 IS NULL OR r.date = ?3) \
         ORDER BY r.date, r.hour, r.reservation_id LIMIT ?4 OFFSET ?5"
    );
    let reservations = sqlx::query_as::<_, Reservation>(&sql)
        .bind(user_id)
        .bind(like_pattern(filter.store_name.unwrap_or_default()))
        .bind(filter.date)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;
    Ok(reservations)
}

pub async fn update_slot(
    executor: impl SqliteExecutor<'_>,
    id: i64,
    date: NaiveDate,
    hour: i32,
) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE reservations SET date = ?1, hour = ?2, updated_at = ?3 \
         WHERE reservation_id = ?4 AND status = 'AVAILABLE'",
    )
    .bind(date)
    .bind(hour)
    .bind(now_millis())
    .bind(id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn soft_delete(executor: impl SqliteExecutor<'_>, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE reservations SET status = 'DELETED', updated_at = ?1 \
         WHERE reservation_id = ?2 AND status = 'AVAILABLE'",
    )
    .bind(now_millis())
    .bind(id)
    .execute(executor)
    .await?;
    Ok(rows.rows_affected() > 0)
}
