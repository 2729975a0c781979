//! User Handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{PasswordChangeRequest, SignUpRequest, UserInfoResponse, UserUpdateRequest};

use crate::api::created;
use crate::api::extract::{Json, Path};
use crate::auth::{CurrentUser, hash_password, verify_password};
use crate::db::repository::{RepoError, menu, refresh_token, store, user};
use crate::security_log;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_USERNAME_LEN, validate_optional_required_text,
    validate_optional_text, validate_password, validate_required_text, validate_text_len,
};

fn hash(password: &str) -> AppResult<String> {
    hash_password(password).map_err(|e| {
        tracing::error!("Failed to hash password: {e}");
        AppError::internal("Failed to hash password")
    })
}

/// POST /v1/users - sign up
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> AppResult<Response> {
    validate_required_text(&req.username, "username", MAX_USERNAME_LEN)?;
    validate_password(&req.password)?;
    validate_required_text(&req.nickname, "nickname", MAX_NAME_LEN)?;
    validate_text_len(&req.description, "description", MAX_NOTE_LEN)?;

    let password_hash = hash(&req.password)?;
    let user_id = user::create(
        &state.pool,
        &req.username,
        &password_hash,
        &req.nickname,
        &req.description,
    )
    .await
    .map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::UsernameDuplicate),
        other => other.into(),
    })?;

    tracing::info!(user_id, username = %req.username, "User signed up");
    Ok(created(format!("/v1/users/{user_id}")))
}

/// GET /v1/users/{user_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<UserInfoResponse>> {
    let user = user::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;
    Ok(Json(user))
}

/// GET /v1/users/me
pub async fn me(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<UserInfoResponse>> {
    get_by_id(State(state), Path(current_user.id)).await
}

/// PUT /v1/users/me
pub async fn update_me(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(req): Json<UserUpdateRequest>,
) -> AppResult<Json<UserInfoResponse>> {
    validate_optional_required_text(&req.nickname, "nickname", MAX_NAME_LEN)?;
    validate_optional_text(&req.description, "description", MAX_NOTE_LEN)?;

    let user = user::update_profile(
        &state.pool,
        current_user.id,
        req.nickname.as_deref(),
        req.description.as_deref(),
    )
    .await
    .map_err(|e| match e {
        RepoError::NotFound(_) => AppError::new(ErrorCode::UserNotFound),
        other => other.into(),
    })?;
    Ok(Json(user))
}

/// PUT /v1/users/me/password - also signs out every session
pub async fn change_password(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(req): Json<PasswordChangeRequest>,
) -> AppResult<StatusCode> {
    let credentials = user::find_credentials_by_id(&state.pool, current_user.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    if !verify_password(&req.old_password, &credentials.password_hash) {
        security_log!("password_change_rejected", user_id = current_user.id);
        return Err(AppError::invalid_credentials());
    }
    validate_password(&req.new_password)?;

    let password_hash = hash(&req.new_password)?;
    user::update_password(&state.pool, current_user.id, &password_hash).await?;
    refresh_token::revoke_all(&state.pool, current_user.id).await?;

    tracing::info!(user_id = current_user.id, "Password changed");
    Ok(StatusCode::OK)
}

/// DELETE /v1/users/me - soft delete the caller along with their stores and menus
pub async fn delete_me(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await.map_err(RepoError::from)?;
    if !user::soft_delete(&mut *tx, current_user.id).await? {
        return Err(AppError::new(ErrorCode::UserNotFound));
    }
    let menus = menu::soft_delete_by_registrant(&mut *tx, current_user.id).await?;
    let stores = store::soft_delete_by_registrant(&mut *tx, current_user.id).await?;
    refresh_token::revoke_all(&mut *tx, current_user.id).await?;
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(user_id = current_user.id, stores, menus, "User deleted");
    Ok(StatusCode::OK)
}
