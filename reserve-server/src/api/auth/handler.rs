//! Sign-in Handlers

use axum::{extract::State, http::StatusCode};
use shared::error::{AppError, AppResult};
use shared::models::{SignInRequest, SignInToken, TokenRefreshRequest};

use crate::api::extract::Json;
use crate::auth::{CurrentUser, verify_password};
use crate::db::repository::{refresh_token, user};
use crate::security_log;
use crate::state::AppState;

/// Issue an access token and a fresh refresh token
async fn issue_tokens(state: &AppState, user_id: i64, username: &str) -> AppResult<SignInToken> {
    let access_token = state.jwt.generate_token(user_id, username).map_err(|e| {
        tracing::error!("Failed to generate access token: {e}");
        AppError::internal("Failed to generate token")
    })?;
    let refresh_token = refresh_token::create(&state.pool, user_id, state.refresh_ttl_days).await?;

    Ok(SignInToken {
        access_token,
        refresh_token,
    })
}

/// POST /v1/signin
pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> AppResult<Json<SignInToken>> {
    let credentials = user::find_credentials_by_username(&state.pool, &req.username).await?;

    let credentials = match credentials {
        Some(c) if verify_password(&req.password, &c.password_hash) => c,
        _ => {
            security_log!("signin_failed", username = req.username.as_str());
            return Err(AppError::invalid_credentials());
        }
    };

    let token = issue_tokens(&state, credentials.user_id, &credentials.username).await?;
    tracing::info!(user_id = credentials.user_id, "User signed in");
    Ok(Json(token))
}

/// POST /v1/signin/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<TokenRefreshRequest>,
) -> AppResult<Json<SignInToken>> {
    let Some((user_id, refresh_token)) =
        refresh_token::rotate(&state.pool, &req.refresh_token, state.refresh_ttl_days).await?
    else {
        security_log!("refresh_rejected", reason = "unknown, expired or used");
        return Err(AppError::invalid_token());
    };

    let user = user::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(AppError::invalid_token)?;

    let access_token = state.jwt.generate_token(user.user_id, &user.username).map_err(|e| {
        tracing::error!("Failed to generate access token: {e}");
        AppError::internal("Failed to generate token")
    })?;

    Ok(Json(SignInToken {
        access_token,
        refresh_token,
    }))
}

/// POST /v1/signout - revoke every refresh token of the caller
pub async fn sign_out(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<StatusCode> {
    let revoked = refresh_token::revoke_all(&state.pool, current_user.id).await?;
    tracing::info!(user_id = current_user.id, revoked, "User signed out");
    Ok(StatusCode::OK)
}
