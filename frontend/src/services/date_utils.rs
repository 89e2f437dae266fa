use chrono::NaiveDate;
use js_sys::Date;

/// Current civil date from the browser clock.
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1, // JavaScript months are 0-indexed
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Current instant in epoch milliseconds; doubles as a booking id.
pub fn now_millis() -> i64 {
    Date::now() as i64
}

/// Current instant as an RFC 3339 timestamp.
pub fn now_rfc3339() -> String {
    String::from(Date::new_0().to_iso_string())
}
