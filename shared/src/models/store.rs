//! Store Model

use serde::{Deserialize, Serialize};

use super::page::PageRequest;

/// Store entity as seen by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct StoreInfoResponse {
    pub store_id: i64,
    /// User who registered the store
    pub registrant_id: i64,
    pub name: String,
    pub address: String,
    pub description: String,
}

/// Create store payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCreateRequest {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub description: String,
}

/// Update store payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreUpdateRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// `GET /v1/stores` query
///
/// Page fields are kept inline: query strings cannot go through
/// `#[serde(flatten)]` with numeric fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSearchRequest {
    pub query: Option<String>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

impl StoreSearchRequest {
    pub fn page(&self) -> PageRequest {
        PageRequest {
            page_size: self.page_size,
            page_number: self.page_number,
        }
    }
}
