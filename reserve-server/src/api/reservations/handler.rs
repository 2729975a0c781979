//! Reservation Handlers
//!
//! Who sees what:
//!
//! | Operation | Creator | Registrant | Anyone else |
//! |-----------|---------|------------|-------------|
//! | read      | 200     | 200        | 404         |
//! | menus     | 200     | 200        | 403         |
//! | update    | 200     | 403        | 404         |
//! | cancel    | 200     | 200        | 404         |

use std::collections::HashMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    ListResponse, ReservationCreateRequest, ReservationInfoResponse, ReservationMenuResponse,
    ReservationSearchRequest, ReservationUpdateRequest,
};
use sqlx::SqlitePool;

use crate::api::access::find_store;
use crate::api::created;
use crate::api::extract::{Json, Path, Query};
use crate::auth::CurrentUser;
use crate::db::models::Reservation;
use crate::db::repository::reservation::SearchFilter;
use crate::db::repository::{RepoError, menu, notification, reservation, reservation_menu};
use crate::security_log;
use crate::state::AppState;
use crate::utils::time::validate_slot;
use crate::utils::validation::{MAX_NAME_LEN, MAX_RESERVATION_MENUS, validate_optional_text};

fn not_found() -> AppError {
    AppError::new(ErrorCode::ReservationNotFound)
}

/// Load a reservation the caller is a party to. Anyone else gets 404 so the
/// reservation's existence stays hidden.
async fn find_visible(
    pool: &SqlitePool,
    reservation_id: i64,
    user: &CurrentUser,
) -> AppResult<Reservation> {
    let reservation = reservation::find_by_id(pool, reservation_id)
        .await?
        .ok_or_else(not_found)?;
    if !reservation.is_party(user.id) {
        security_log!(
            "reservation_hidden",
            user_id = user.id,
            reservation_id = reservation_id
        );
        return Err(not_found());
    }
    Ok(reservation)
}

/// POST /v1/reservations
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(req): Json<ReservationCreateRequest>,
) -> AppResult<Response> {
    let store = find_store(&state.pool, req.store_id).await?;
    validate_slot(req.date, req.hour, state.timezone)?;

    if req.menus.len() > MAX_RESERVATION_MENUS {
        return Err(AppError::validation(format!(
            "at most {MAX_RESERVATION_MENUS} menus per reservation"
        )));
    }
    if let Some(line) = req.menus.iter().find(|m| m.quantity < 1) {
        return Err(AppError::validation(format!(
            "quantity of menu {} must be at least 1",
            line.menu_id
        )));
    }

    let mut tx = state.pool.begin().await.map_err(RepoError::from)?;

    // Insert before reading: a deferred read-then-write hits SQLITE_BUSY under WAL
    let reservation_id = reservation::create(
        &mut *tx,
        current_user.id,
        store.store_id,
        req.date,
        req.hour,
    )
    .await?;

    let offered: HashMap<i64, _> = menu::find_by_store(&mut *tx, store.store_id)
        .await?
        .into_iter()
        .map(|m| (m.menu_id, m))
        .collect();

    for line in &req.menus {
        let Some(menu) = offered.get(&line.menu_id) else {
            return Err(AppError::with_message(
                ErrorCode::MenuNotInStore,
                format!("Menu {} is not offered by store {}", line.menu_id, store.store_id),
            ));
        };
        reservation_menu::create(&mut *tx, reservation_id, &menu.name, menu.price, line.quantity)
            .await?;
    }

    if store.registrant_id != current_user.id {
        let message = format!(
            "New reservation #{reservation_id} at {} on {} {:02}:00",
            store.name, req.date, req.hour
        );
        notification::create(&mut *tx, store.registrant_id, &message).await?;
    }

    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        reservation_id,
        store_id = store.store_id,
        user_id = current_user.id,
        "Reservation created"
    );
    Ok(created(format!("/v1/reservations/{reservation_id}")))
}

/// GET /v1/reservations/{reservation_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(reservation_id): Path<i64>,
) -> AppResult<Json<ReservationInfoResponse>> {
    let reservation = find_visible(&state.pool, reservation_id, &current_user).await?;
    Ok(Json(reservation.into()))
}

/// GET /v1/reservations/{reservation_id}/menus
pub async fn list_menus(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(reservation_id): Path<i64>,
) -> AppResult<Json<ListResponse<ReservationMenuResponse>>> {
    let reservation = reservation::find_by_id(&state.pool, reservation_id)
        .await?
        .ok_or_else(not_found)?;
    if !reservation.is_party(current_user.id) {
        security_log!(
            "reservation_menus_denied",
            user_id = current_user.id,
            reservation_id = reservation_id
        );
        return Err(AppError::access_denied());
    }

    let lines = reservation_menu::find_by_reservation(&state.pool, reservation_id).await?;
    Ok(Json(ListResponse::new(lines)))
}

/// GET /v1/reservations?type=CUSTOMER|REGISTRANT&query=&date=
pub async fn search(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(req): Query<ReservationSearchRequest>,
) -> AppResult<Json<ListResponse<ReservationInfoResponse>>> {
    validate_optional_text(&req.query, "query", MAX_NAME_LEN)?;

    let filter = SearchFilter {
        store_name: req.query.as_deref(),
        date: req.date,
    };
    let reservations = reservation::search(
        &state.pool,
        current_user.id,
        req.search_type,
        filter,
        req.page(),
    )
    .await?;

    let results = reservations.into_iter().map(Into::into).collect();
    Ok(Json(ListResponse::new(results)))
}

/// PUT /v1/reservations/{reservation_id} - creator only
pub async fn update(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(reservation_id): Path<i64>,
    Json(req): Json<ReservationUpdateRequest>,
) -> AppResult<Json<ReservationInfoResponse>> {
    let existing = find_visible(&state.pool, reservation_id, &current_user).await?;
    if !existing.is_creator(current_user.id) {
        security_log!(
            "reservation_update_denied",
            user_id = current_user.id,
            reservation_id = reservation_id
        );
        return Err(AppError::access_denied());
    }

    let date = req.date.unwrap_or(existing.date);
    let hour = req.hour.unwrap_or(existing.hour);
    validate_slot(date, hour, state.timezone)?;

    let mut tx = state.pool.begin().await.map_err(RepoError::from)?;
    if !reservation::update_slot(&mut *tx, reservation_id, date, hour).await? {
        return Err(not_found());
    }
    if !existing.is_registrant(current_user.id) {
        let message = format!(
            "Reservation #{reservation_id} at {} moved to {date} {hour:02}:00",
            existing.store_name
        );
        notification::create(&mut *tx, existing.registrant_id, &message).await?;
    }
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(reservation_id, %date, hour, "Reservation rescheduled");
    let mut info = ReservationInfoResponse::from(existing);
    info.date = date;
    info.hour = hour;
    Ok(Json(info))
}

/// DELETE /v1/reservations/{reservation_id} - creator or registrant cancels
pub async fn cancel(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(reservation_id): Path<i64>,
) -> AppResult<StatusCode> {
    let existing = find_visible(&state.pool, reservation_id, &current_user).await?;

    // Tell whichever party did not cancel
    let recipient = if existing.is_creator(current_user.id) {
        existing.registrant_id
    } else {
        existing.user_id
    };

    let mut tx = state.pool.begin().await.map_err(RepoError::from)?;
    if !reservation::soft_delete(&mut *tx, reservation_id).await? {
        return Err(not_found());
    }
    if recipient != current_user.id {
        let message = format!(
            "Reservation #{reservation_id} at {} on {} {:02}:00 was cancelled",
            existing.store_name, existing.date, existing.hour
        );
        notification::create(&mut *tx, recipient, &message).await?;
    }
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(reservation_id, user_id = current_user.id, "Reservation cancelled");
    Ok(StatusCode::OK)
}
