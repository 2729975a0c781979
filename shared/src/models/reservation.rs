//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::page::PageRequest;

/// Reservation as seen by its creator or by the store registrant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationInfoResponse {
    pub reservation_id: i64,
    pub store_id: i64,
    /// User who made the reservation
    pub user_id: i64,
    pub date: NaiveDate,
    pub hour: i32,
}

/// Menu line of a reservation, snapshotted when the reservation was made
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ReservationMenuResponse {
    pub reservation_menu_id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
}

/// One menu line in a reservation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationMenuRequest {
    pub menu_id: i64,
    pub quantity: i32,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreateRequest {
    pub store_id: i64,
    pub date: NaiveDate,
    pub hour: i32,
    #[serde(default)]
    pub menus: Vec<ReservationMenuRequest>,
}

/// Update reservation payload (absent fields are left unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdateRequest {
    pub date: Option<NaiveDate>,
    pub hour: Option<i32>,
}

/// Which side of the reservation the caller searches from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
    /// Reservations the caller made
    Customer,
    /// Reservations at stores the caller registered
    Registrant,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Customer => f.write_str("CUSTOMER"),
            SearchType::Registrant => f.write_str("REGISTRANT"),
        }
    }
}

/// `GET /v1/reservations` query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSearchRequest {
    #[serde(rename = "type")]
    pub search_type: SearchType,
    /// Case-insensitive substring of the store name
    pub query: Option<String>,
    pub date: Option<NaiveDate>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

impl ReservationSearchRequest {
    pub fn page(&self) -> PageRequest {
        PageRequest {
            page_size: self.page_size,
            page_number: self.page_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&SearchType::Customer).unwrap(),
            "\"CUSTOMER\""
        );
        let parsed: SearchType = serde_json::from_str("\"REGISTRANT\"").unwrap();
        assert_eq!(parsed, SearchType::Registrant);
        assert_eq!(SearchType::Registrant.to_string(), "REGISTRANT");
    }

    #[test]
    fn test_info_response_date_format() {
        let resp = ReservationInfoResponse {
            reservation_id: 1,
            store_id: 2,
            user_id: 3,
            date: NaiveDate::from_ymd_opt(2030, 5, 17).unwrap(),
            hour: 12,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["date"], "2030-05-17");
        assert_eq!(json["storeId"], 2);
        assert_eq!(json["hour"], 12);
    }
}
