//! Reservation slot checks in the business timezone

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use shared::error::{AppError, AppResult, ErrorCode};

/// Today's date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Start of a reservation slot, `None` if the hour is outside 0..=23
pub fn slot_start(date: NaiveDate, hour: i32) -> Option<NaiveDateTime> {
    let hour = u32::try_from(hour).ok()?;
    date.and_hms_opt(hour, 0, 0)
}

/// Reject slots that are malformed or not strictly after `now`.
pub fn validate_slot_at(
    date: NaiveDate,
    hour: i32,
    now: DateTime<Utc>,
    tz: Tz,
) -> AppResult<()> {
    let start = slot_start(date, hour).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::InvalidReservationTime,
            format!("hour must be between 0 and 23, got {hour}"),
        )
    })?;
    let local_now = now.with_timezone(&tz).naive_local();
    if start <= local_now {
        return Err(AppError::with_message(
            ErrorCode::InvalidReservationTime,
            format!("{date} {hour:02}:00 is in the past"),
        ));
    }
    Ok(())
}

/// [`validate_slot_at`] against the current time.
pub fn validate_slot(date: NaiveDate, hour: i32, tz: Tz) -> AppResult<()> {
    validate_slot_at(date, hour, Utc::now(), tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 5, 17, 10, 30, 0).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 5, d).unwrap()
    }

    #[test]
    fn test_future_slot_accepted() {
        assert!(validate_slot_at(date(17), 11, now(), Tz::UTC).is_ok());
        assert!(validate_slot_at(date(18), 0, now(), Tz::UTC).is_ok());
    }

    #[test]
    fn test_past_slot_rejected() {
        let err = validate_slot_at(date(17), 10, now(), Tz::UTC).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidReservationTime);
        assert!(validate_slot_at(date(16), 23, now(), Tz::UTC).is_err());
    }

    #[test]
    fn test_hour_out_of_range() {
        assert!(validate_slot_at(date(20), 24, now(), Tz::UTC).is_err());
        assert!(validate_slot_at(date(20), -1, now(), Tz::UTC).is_err());
    }

    #[test]
    fn test_timezone_shifts_now() {
        // 10:30 UTC is 19:30 in Seoul
        let seoul: Tz = "Asia/Seoul".parse().unwrap();
        assert!(validate_slot_at(date(17), 19, now(), seoul).is_err());
        assert!(validate_slot_at(date(17), 20, now(), seoul).is_ok());
    }
}
