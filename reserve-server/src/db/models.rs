//! Row types that never leave the server
//!
//! Client-facing rows decode straight into the `shared::models` responses.

use chrono::NaiveDate;
use shared::models::ReservationInfoResponse;
use sqlx::FromRow;

/// User row including the password hash
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Reservation joined with the registrant of its store
#[derive(Debug, Clone, FromRow)]
pub struct Reservation {
    pub reservation_id: i64,
    pub store_id: i64,
    pub store_name: String,
    /// Creator
    pub user_id: i64,
    /// Registrant of the reserved store
    pub registrant_id: i64,
    pub date: NaiveDate,
    pub hour: i32,
}

impl Reservation {
    pub fn is_creator(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    pub fn is_registrant(&self, user_id: i64) -> bool {
        self.registrant_id == user_id
    }

    /// Creator or registrant
    pub fn is_party(&self, user_id: i64) -> bool {
        self.is_creator(user_id) || self.is_registrant(user_id)
    }
}

impl From<Reservation> for ReservationInfoResponse {
    fn from(r: Reservation) -> Self {
        Self {
            reservation_id: r.reservation_id,
            store_id: r.store_id,
            user_id: r.user_id,
            date: r.date,
            hour: r.hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation() -> Reservation {
        Reservation {
            reservation_id: 1,
            store_id: 10,
            store_name: "Pasta House".into(),
            user_id: 100,
            registrant_id: 200,
            date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            hour: 12,
        }
    }

    #[test]
    fn test_parties() {
        let r = reservation();
        assert!(r.is_creator(100));
        assert!(!r.is_creator(200));
        assert!(r.is_registrant(200));
        assert!(r.is_party(100) && r.is_party(200));
        assert!(!r.is_party(300));
    }

    #[test]
    fn test_into_response() {
        let resp = ReservationInfoResponse::from(reservation());
        assert_eq!(resp.reservation_id, 1);
        assert_eq!(resp.store_id, 10);
        assert_eq!(resp.user_id, 100);
        assert_eq!(resp.hour, 12);
    }
}
