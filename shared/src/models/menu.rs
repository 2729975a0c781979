//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu entity as seen by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct MenuInfoResponse {
    pub menu_id: i64,
    pub store_id: i64,
    pub name: String,
    pub price: i64,
    pub description: String,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreateRequest {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub description: String,
}

/// Update menu payload (absent fields are left unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdateRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
}
