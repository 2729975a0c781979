//! Reservation menu lines

use shared::models::ReservationMenuResponse;
use shared::util::now_millis;
use sqlx::SqliteExecutor;

use super::RepoResult;

/// Insert a line copied from a menu at reservation time
pub async fn create(
    executor: impl SqliteExecutor<'_>,
    reservation_id: i64,
    name: &str,
    price: i64,
    quantity: i32,
) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO reservation_menus (reservation_id, name, price, quantity, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5) RETURNING reservation_menu_id",
    )
    .bind(reservation_id)
    .bind(name)
    .bind(price)
    .bind(quantity)
    .bind(now_millis())
    .fetch_one(executor)
    .await?;
    Ok(id)
}

/// Lines of a reservation in insertion order
pub async fn find_by_reservation(
    executor: impl SqliteExecutor<'_>,
    reservation_id: i64,
) -> RepoResult<Vec<ReservationMenuResponse>> {
    let lines = sqlx::query_as::<_, ReservationMenuResponse>(
        "SELECT reservation_menu_id, name, price, quantity FROM reservation_menus \
         WHERE reservation_id = ? ORDER BY reservation_menu_id",
    )
    .bind(reservation_id)
    .fetch_all(executor)
    .await?;
    Ok(lines)
}
