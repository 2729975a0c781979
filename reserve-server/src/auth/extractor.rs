//! JWT Extractor
//!
//! Validates the bearer token and yields the calling user, who must still
//! exist and not be deleted.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::db::repository::user;
use crate::security_log;
use crate::state::AppState;

/// Use this extractor in protected handlers to require a valid access token.
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => {
                JwtService::extract_from_header(header).ok_or_else(AppError::invalid_token)?
            }
            None => {
                security_log!("auth_missing", uri = format!("{:?}", parts.uri));
                return Err(AppError::unauthorized());
            }
        };

        match state.jwt.validate_token(token) {
            Ok(claims) => {
                let current = CurrentUser::try_from(claims).map_err(|_| AppError::invalid_token())?;
                // Tokens outlive account deletion
                if !user::is_available(&state.pool, current.id).await? {
                    security_log!("auth_user_unavailable", user_id = current.id);
                    return Err(AppError::invalid_token());
                }
                parts.extensions.insert(current.clone());
                Ok(current)
            }
            Err(e) => {
                security_log!(
                    "auth_failed",
                    error = format!("{}", e),
                    uri = format!("{:?}", parts.uri)
                );

                match e {
                    JwtError::ExpiredToken => Err(AppError::token_expired()),
                    _ => Err(AppError::invalid_token()),
                }
            }
        }
    }
}
