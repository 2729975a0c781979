//! Notification Model

use serde::{Deserialize, Serialize};

use super::page::PageRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub notification_id: i64,
    pub message: String,
    pub read: bool,
    /// Unix millis
    pub created_at: i64,
}

/// `GET /v1/notifications` query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListRequest {
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

impl NotificationListRequest {
    pub fn page(&self) -> PageRequest {
        PageRequest {
            page_size: self.page_size,
            page_number: self.page_number,
        }
    }
}
