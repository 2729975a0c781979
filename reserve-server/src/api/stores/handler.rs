//! Store Handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};
use shared::error::AppResult;
use shared::models::{
    ListResponse, StoreCreateRequest, StoreInfoResponse, StoreSearchRequest, StoreUpdateRequest,
};

use crate::api::access::{find_store, owned_store};
use crate::api::created;
use crate::api::extract::{Json, Path, Query};
use crate::auth::CurrentUser;
use crate::db::repository::{RepoError, menu, store};
use crate::state::AppState;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_required_text,
    validate_optional_text, validate_required_text, validate_text_len,
};

/// POST /v1/stores - the caller becomes the registrant
pub async fn create(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(req): Json<StoreCreateRequest>,
) -> AppResult<Response> {
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&req.address, "address", MAX_ADDRESS_LEN)?;
    validate_text_len(&req.description, "description", MAX_NOTE_LEN)?;

    let store = store::create(&state.pool, current_user.id, &req).await?;

    tracing::info!(store_id = store.store_id, registrant_id = current_user.id, "Store registered");
    Ok(created(format!("/v1/stores/{}", store.store_id)))
}

/// GET /v1/stores/{store_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> AppResult<Json<StoreInfoResponse>> {
    let store = find_store(&state.pool, store_id).await?;
    Ok(Json(store))
}

/// GET /v1/stores?query=&pageSize=&pageNumber=
pub async fn search(
    State(state): State<AppState>,
    Query(req): Query<StoreSearchRequest>,
) -> AppResult<Json<ListResponse<StoreInfoResponse>>> {
    validate_optional_text(&req.query, "query", MAX_NAME_LEN)?;

    let stores = store::search(&state.pool, req.query.as_deref(), req.page()).await?;
    Ok(Json(ListResponse::new(stores)))
}

/// PUT /v1/stores/{store_id} - registrant only
pub async fn update(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(store_id): Path<i64>,
    Json(req): Json<StoreUpdateRequest>,
) -> AppResult<Json<StoreInfoResponse>> {
    owned_store(&state.pool, store_id, &current_user).await?;

    validate_optional_required_text(&req.name, "name", MAX_NAME_LEN)?;
    validate_optional_required_text(&req.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&req.description, "description", MAX_NOTE_LEN)?;

    let store = store::update(&state.pool, store_id, &req).await?;
    Ok(Json(store))
}

/// DELETE /v1/stores/{store_id} - registrant only, removes the menus too
pub async fn delete(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(store_id): Path<i64>,
) -> AppResult<StatusCode> {
    owned_store(&state.pool, store_id, &current_user).await?;

    let mut tx = state.pool.begin().await.map_err(RepoError::from)?;
    store::soft_delete(&mut *tx, store_id).await?;
    let menus = menu::soft_delete_by_store(&mut *tx, store_id).await?;
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(store_id, menus, "Store deleted");
    Ok(StatusCode::OK)
}
