//! Menu Handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};
use shared::error::AppResult;
use shared::models::{ListResponse, MenuCreateRequest, MenuInfoResponse, MenuUpdateRequest};

use crate::api::access::{find_menu, find_store, owned_menu, owned_store};
use crate::api::created;
use crate::api::extract::{Json, Path};
use crate::auth::CurrentUser;
use crate::db::repository::menu;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_required_text, validate_optional_text,
    validate_price, validate_required_text, validate_text_len,
};

/// POST /v1/stores/{store_id}/menus - registrant only
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(store_id): Path<i64>,
    Json(req): Json<MenuCreateRequest>,
) -> AppResult<Response> {
    owned_store(&state.pool, store_id, &current_user).await?;

    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    validate_price(req.price)?;
    validate_text_len(&req.description, "description", MAX_NOTE_LEN)?;

    let menu = menu::create(&state.pool, store_id, &req).await?;

    tracing::info!(menu_id = menu.menu_id, store_id, "Menu created");
    Ok(created(format!("/v1/menus/{}", menu.menu_id)))
}

/// GET /v1/stores/{store_id}/menus - insertion order
pub async fn list_by_store(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<ListResponse<MenuInfoResponse>>> {
    find_store(&state.pool, store_id).await?;
    let menus = menu::find_by_store(&state.pool, store_id).await?;
    Ok(Json(ListResponse::new(menus)))
}

/// GET /v1/menus/{menu_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(menu_id): Path<i64>,
) -> AppResult<Json<MenuInfoResponse>> {
    let menu = find_menu(&state.pool, menu_id).await?;
    Ok(Json(menu))
}

/// PUT /v1/menus/{menu_id} - absent fields are left unchanged
pub async fn update(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(menu_id): Path<i64>,
    Json(req): Json<MenuUpdateRequest>,
) -> AppResult<Json<MenuInfoResponse>> {
    owned_menu(&state.pool, menu_id, &current_user).await?;

    validate_optional_required_text(&req.name, "name", MAX_NAME_LEN)?;
    if let Some(price) = req.price {
        validate_price(price)?;
    }
    validate_optional_text(&req.description, "description", MAX_NOTE_LEN)?;

    let menu = menu::update(&state.pool, menu_id, &req).await?;
    Ok(Json(menu))
}

/// DELETE /v1/menus/{menu_id}
pub async fn delete(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(menu_id): Path<i64>,
) -> AppResult<StatusCode> {
    owned_menu(&state.pool, menu_id, &current_user).await?;
    menu::soft_delete(&state.pool, menu_id).await?;

    tracing::info!(menu_id, "Menu deleted");
    Ok(StatusCode::OK)
}
