//! One-day spreadsheet export.
//!
//! Emits a UTF-8 CSV with a leading byte-order mark, CRLF line endings and
//! every field double-quoted (internal quotes doubled), which is what the
//! desktop spreadsheet tools the studio uses expect from a comma-separated
//! file. One header row, then one row per booking on the target day.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fmt;

use crate::{Booking, CatalogEntry};

/// UTF-8 byte-order mark; spreadsheet tools use it to detect the encoding.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Fixed column set of the day report.
pub const REPORT_COLUMNS: [&str; 13] = [
    "Date",
    "First name",
    "Last name",
    "Service",
    "Category",
    "Price",
    "Deposit",
    "Payment",
    "Phone",
    "Email",
    "Notes",
    "Created at",
    "Paid at",
];

/// The report could not be produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportError(pub String);

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "export failed: {}", self.0)
    }
}

impl std::error::Error for ExportError {}

/// Report filename for a `DD/MM/YYYY` day: `agenda-DD-MM-YYYY.csv`.
pub fn report_filename(day: &str) -> String {
    format!("agenda-{}.csv", day.replace('/', "-"))
}

/// The bookings scheduled on the given day, in creation order.
pub fn bookings_for_day<'a>(bookings: &'a [Booking], day: &str) -> Vec<&'a Booking> {
    bookings.iter().filter(|b| b.date == day).collect()
}

/// Serialize one day's bookings: header row plus one row per booking.
///
/// Callers are expected to check for an empty day first (no file is produced
/// for a day without bookings); an empty input here still yields a
/// header-only document.
pub fn day_report_csv(bookings: &[&Booking], catalog: &[CatalogEntry]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::from(UTF8_BOM));

    writer
        .write_record(REPORT_COLUMNS)
        .map_err(|e| ExportError(e.to_string()))?;

    for booking in bookings {
        let category = catalog
            .iter()
            .find(|e| e.id == booking.service_id)
            .map(|e| e.category.as_str())
            .unwrap_or("");
        let price = format!("{:.2}", booking.price);
        let deposit = format!("{:.2}", booking.deposit);
        writer
            .write_record([
                booking.date.as_str(),
                booking.first_name.as_str(),
                booking.last_name.as_str(),
                booking.service_name.as_str(),
                category,
                price.as_str(),
                deposit.as_str(),
                booking.payment_status.as_str(),
                booking.phone.as_deref().unwrap_or(""),
                booking.email.as_deref().unwrap_or(""),
                booking.notes.as_str(),
                booking.created_at.as_str(),
                booking.paid_at.as_deref().unwrap_or(""),
            ])
            .map_err(|e| ExportError(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaymentStatus;

    fn make_booking(id: i64, date: &str, first: &str) -> Booking {
        Booking {
            id,
            date: date.to_string(),
            first_name: first.to_string(),
            last_name: "Suarez".to_string(),
            phone: Some("555-0101".to_string()),
            email: Some("ana@example.com".to_string()),
            service_id: "lash-classic".to_string(),
            service_name: "Classic lash set".to_string(),
            price: 55.0,
            deposit: 16.5,
            notes: "No additional details".to_string(),
            sms_reminder: false,
            payment_status: PaymentStatus::Pending,
            created_at: "2026-08-08T10:00:00.000Z".to_string(),
            paid_at: None,
        }
    }

    fn make_entry() -> CatalogEntry {
        CatalogEntry {
            id: "lash-classic".to_string(),
            name: "Classic lash set".to_string(),
            category: "Lashes".to_string(),
            subcategory: None,
            duration_min: 90,
            price: 55.0,
            deposit: 16.5,
            deposit_pct: 30,
            description: String::new(),
            popular: false,
        }
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(report_filename("08/08/2026"), "agenda-08-08-2026.csv");
    }

    #[test]
    fn test_bookings_for_day_filters_by_exact_date() {
        let bookings = vec![
            make_booking(1, "10/08/2026", "Ana"),
            make_booking(2, "11/08/2026", "Maria"),
            make_booking(3, "10/08/2026", "Lucia"),
        ];
        let day = bookings_for_day(&bookings, "10/08/2026");
        let ids: Vec<i64> = day.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(bookings_for_day(&bookings, "12/08/2026").is_empty());
    }

    #[test]
    fn test_csv_has_bom_header_and_one_row_per_booking() {
        let bookings = vec![
            make_booking(1, "10/08/2026", "Ana"),
            make_booking(2, "10/08/2026", "Maria"),
        ];
        let refs: Vec<&Booking> = bookings.iter().collect();
        let bytes = day_report_csv(&refs, &[make_entry()]).unwrap();

        assert_eq!(&bytes[..3], &UTF8_BOM);
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();

        // Header + N bookings = N + 1 CRLF-terminated lines
        let lines: Vec<&str> = text.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\"Date\",\"First name\""));
        assert!(lines[1].contains("\"Ana\""));
        assert!(lines[1].contains("\"Lashes\""));
        assert!(lines[1].contains("\"55.00\""));
        assert!(lines[1].contains("\"pending\""));
        assert!(lines[2].contains("\"Maria\""));
        // No bare LF line endings
        assert!(!text.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_csv_quotes_every_field_and_doubles_inner_quotes() {
        let mut booking = make_booking(1, "10/08/2026", "Ana");
        booking.notes = r#"asked for the "natural" look, maybe"#.to_string();
        let refs = vec![&booking];
        let bytes = day_report_csv(&refs, &[]).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();

        assert!(text.contains(r#""asked for the ""natural"" look, maybe""#));
        // Unknown service id leaves the category cell empty but quoted
        assert!(text.contains(r#""Classic lash set","","55.00""#));
    }
}
