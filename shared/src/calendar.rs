//! Calendar domain logic for the booking widget.
//!
//! Everything here is a pure computation over a focus month, a reference
//! "today" and the booking list; the UI only handles presentation. The grid
//! is always 42 cells (6 weeks × 7 days), Monday-first, spanning the trailing
//! days of the previous month and the leading days of the next one.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{format_day, Booking};

/// Total number of cells in the month grid.
pub const GRID_CELLS: usize = 42;

/// Which month a grid cell belongs to, relative to the focused month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    PrevMonth,
    CurrentMonth,
    NextMonth,
}

/// One cell of the 6×7 month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Day-of-month number shown in the cell
    pub day: u32,
    /// Canonical `DD/MM/YYYY` string for the cell's actual date
    pub date: String,
    pub kind: CellKind,
    pub is_today: bool,
    pub is_selected: bool,
    /// Number of bookings whose date equals this cell's date
    pub booking_count: usize,
    /// Strictly before today; disabled cells are never clickable
    pub disabled: bool,
}

impl CalendarCell {
    pub fn has_bookings(&self) -> bool {
        self.booking_count > 0
    }
}

/// A fully computed month view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub month: u32,
    pub year: i32,
    /// Always [`GRID_CELLS`] cells, Monday-first
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Human-readable name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Number of days in a given month and year.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Weekday of the month's first day, remapped Monday=0 .. Sunday=6.
pub fn first_weekday(month: u32, year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_monday())
        .unwrap_or(0)
}

/// Navigate to the previous month, rolling the year back over January.
pub fn previous_month(month: u32, year: i32) -> (u32, i32) {
    if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Navigate to the next month, rolling the year forward over December.
pub fn next_month(month: u32, year: i32) -> (u32, i32) {
    if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    }
}

/// Build the 42-cell grid for a focus month.
///
/// * trailing previous-month cells fill the slots before day 1
/// * every current-month day gets its `today`/`selected`/booking flags
/// * leading next-month cells pad the grid to 42
///
/// The past-date rule (`disabled` iff strictly before `today`) is applied
/// uniformly to all three kinds. Only current-month cells can be `selected`.
pub fn build_month_grid(
    month: u32,
    year: i32,
    today: NaiveDate,
    selected: Option<&str>,
    bookings: &[Booking],
) -> MonthGrid {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for booking in bookings {
        *counts.entry(booking.date.as_str()).or_insert(0) += 1;
    }

    let lead = first_weekday(month, year);
    let days = days_in_month(month, year);
    let (prev_m, prev_y) = previous_month(month, year);
    let (next_m, next_y) = next_month(month, year);
    let last_prev = days_in_month(prev_m, prev_y);

    let mut cells = Vec::with_capacity(GRID_CELLS);

    let push_cell = |cells: &mut Vec<CalendarCell>, y: i32, m: u32, day: u32, kind: CellKind| {
        // from_ymd_opt never fails here: day is within the month by construction
        let date = match NaiveDate::from_ymd_opt(y, m, day) {
            Some(d) => d,
            None => return,
        };
        let date_str = format_day(date);
        cells.push(CalendarCell {
            day,
            kind,
            is_today: date == today,
            is_selected: kind == CellKind::CurrentMonth && selected == Some(date_str.as_str()),
            booking_count: counts.get(date_str.as_str()).copied().unwrap_or(0),
            disabled: date < today,
            date: date_str,
        });
    };

    // Trailing days of the previous month
    for day in (last_prev - lead + 1)..=last_prev {
        push_cell(&mut cells, prev_y, prev_m, day, CellKind::PrevMonth);
    }

    // Days of the focus month
    for day in 1..=days {
        push_cell(&mut cells, year, month, day, CellKind::CurrentMonth);
    }

    // Leading days of the next month, padding the grid to 42 cells
    let remaining = GRID_CELLS - (lead as usize + days as usize);
    for day in 1..=(remaining as u32) {
        push_cell(&mut cells, next_y, next_m, day, CellKind::NextMonth);
    }

    debug_assert_eq!(cells.len(), GRID_CELLS);

    MonthGrid { month, year, cells }
}
