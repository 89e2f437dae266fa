//! Filter predicates for the booking list.
//!
//! Applied in a fixed order: temporal filter, then free-text search, then
//! category. All predicates are pure; "today" is always an explicit argument
//! so the pipeline can be exercised without a clock.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Booking, CatalogEntry};

/// Temporal restriction on the visible booking set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemporalFilter {
    #[default]
    All,
    Today,
    /// The Monday–Sunday span containing today
    ThisWeek,
}

/// Monday and Sunday of the week containing `today`.
pub fn week_span(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

/// Temporal predicate. Bookings whose stored date no longer parses match
/// nothing but `All`.
pub fn matches_temporal(booking: &Booking, filter: TemporalFilter, today: NaiveDate) -> bool {
    match filter {
        TemporalFilter::All => true,
        TemporalFilter::Today => booking.day() == Some(today),
        TemporalFilter::ThisWeek => match booking.day() {
            Some(day) => {
                let (monday, sunday) = week_span(today);
                day >= monday && day <= sunday
            }
            None => false,
        },
    }
}

/// Case-insensitive substring match against the client's first/last name and
/// the booked service name. A blank query matches everything.
pub fn matches_search(booking: &Booking, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    booking.first_name.to_lowercase().contains(&query)
        || booking.last_name.to_lowercase().contains(&query)
        || booking.service_name.to_lowercase().contains(&query)
}

/// Category predicate, resolved through the catalog entry the booking
/// references. Bookings whose service no longer exists in the catalog match
/// no specific category.
pub fn matches_category(booking: &Booking, category: Option<&str>, catalog: &[CatalogEntry]) -> bool {
    match category {
        None => true,
        Some(wanted) => catalog
            .iter()
            .find(|e| e.id == booking.service_id)
            .map(|e| e.category == wanted)
            .unwrap_or(false),
    }
}

/// The visible subset of the booking list, in date order (unparsable dates
/// last, ties broken by creation id).
pub fn visible_bookings<'a>(
    bookings: &'a [Booking],
    filter: TemporalFilter,
    query: &str,
    category: Option<&str>,
    catalog: &[CatalogEntry],
    today: NaiveDate,
) -> Vec<&'a Booking> {
    let mut visible: Vec<&Booking> = bookings
        .iter()
        .filter(|b| matches_temporal(b, filter, today))
        .filter(|b| matches_search(b, query))
        .filter(|b| matches_category(b, category, catalog))
        .collect();
    visible.sort_by_key(|b| (b.day().unwrap_or(NaiveDate::MAX), b.id));
    visible
}
