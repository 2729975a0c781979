//! User Model

use serde::{Deserialize, Serialize};

/// Public user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub user_id: i64,
    pub username: String,
    pub nickname: String,
    pub description: String,
}

/// Sign up payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
    pub nickname: String,
    #[serde(default)]
    pub description: String,
}

/// Profile update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub nickname: Option<String>,
    pub description: Option<String>,
}

/// Password change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub old_password: String,
    pub new_password: String,
}
