//! Booking form validation and construction.
//!
//! Validation runs in a fixed order and stops at the first failure, so the
//! user always sees the most fundamental problem first. Bookings are only
//! ever constructed through [`build_booking`], after validation and the
//! deposit confirmation both pass.

use chrono::NaiveDate;
use std::fmt;

use crate::{parse_day, Booking, CatalogEntry, PaymentStatus};

/// Placeholder stored when the notes field is left blank.
const NO_NOTES: &str = "No additional details";

/// Raw form input, exactly as captured from the widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub first_name: String,
    pub last_name: String,
    /// `DD/MM/YYYY`, usually filled by the calendar picker
    pub date: String,
    pub service_id: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
    pub sms_reminder: bool,
}

/// Why a submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFormError {
    MissingRequiredFields,
    InvalidDateFormat,
    DateInPast,
    /// The chosen service id is not in the loaded catalog
    UnknownService,
}

impl fmt::Display for BookingFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingFormError::MissingRequiredFields => {
                write!(f, "Fill in all required fields: first name, last name, date and service")
            }
            BookingFormError::InvalidDateFormat => {
                write!(f, "Invalid date format. Use DD/MM/YYYY")
            }
            BookingFormError::DateInPast => {
                write!(f, "Bookings cannot be made for past dates")
            }
            BookingFormError::UnknownService => {
                write!(f, "The selected service is no longer available")
            }
        }
    }
}

impl std::error::Error for BookingFormError {}

/// Validate a submission, short-circuiting on the first failure:
/// required fields, then date format, then the past-date rule.
pub fn validate_booking_form(form: &BookingForm, today: NaiveDate) -> Result<(), BookingFormError> {
    let required = [
        form.first_name.trim(),
        form.last_name.trim(),
        form.date.trim(),
        form.service_id.trim(),
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(BookingFormError::MissingRequiredFields);
    }

    let date = parse_day(form.date.trim()).ok_or(BookingFormError::InvalidDateFormat)?;

    if date < today {
        return Err(BookingFormError::DateInPast);
    }

    Ok(())
}

/// Construct the booking appended on confirmation.
///
/// `price`/`deposit` snapshot the catalog entry at this moment; `id_millis`
/// is the creation timestamp in epoch milliseconds and doubles as the id.
pub fn build_booking(
    form: &BookingForm,
    entry: &CatalogEntry,
    id_millis: i64,
    created_at: String,
) -> Booking {
    let optional = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };
    let notes = form.notes.trim();

    Booking {
        id: id_millis,
        date: form.date.trim().to_string(),
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        phone: optional(&form.phone),
        email: optional(&form.email),
        service_id: entry.id.clone(),
        service_name: entry.name.clone(),
        price: entry.price,
        deposit: entry.deposit,
        notes: if notes.is_empty() {
            NO_NOTES.to_string()
        } else {
            notes.to_string()
        },
        sms_reminder: form.sms_reminder,
        payment_status: PaymentStatus::Pending,
        created_at,
        paid_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> BookingForm {
        BookingForm {
            first_name: "Ana".to_string(),
            last_name: "Suarez".to_string(),
            date: "10/08/2026".to_string(),
            service_id: "lash-classic".to_string(),
            phone: String::new(),
            email: String::new(),
            notes: String::new(),
            sms_reminder: false,
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
            popular: true,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate_booking_form(&make_form(), today()), Ok(()));
    }

    #[test]
    fn test_missing_required_fields_rejected_first() {
        for blank in ["first_name", "last_name", "date", "service_id"] {
            let mut form = make_form();
            match blank {
                "first_name" => form.first_name = "  ".to_string(),
                "last_name" => form.last_name = String::new(),
                "date" => form.date = String::new(),
                _ => form.service_id = String::new(),
            }
            assert_eq!(
                validate_booking_form(&form, today()),
                Err(BookingFormError::MissingRequiredFields),
                "blank {}",
                blank
            );
        }
    }

    #[test]
    fn test_malformed_date_rejected() {
        for bad in ["10/08", "2026-08-10", "99/99/2026", "tomorrow"] {
            let mut form = make_form();
            form.date = bad.to_string();
            assert_eq!(
                validate_booking_form(&form, today()),
                Err(BookingFormError::InvalidDateFormat),
                "date {}",
                bad
            );
        }
    }

    #[test]
    fn test_past_date_rejected_today_allowed() {
        let mut form = make_form();
        form.date = "07/08/2026".to_string();
        assert_eq!(
            validate_booking_form(&form, today()),
            Err(BookingFormError::DateInPast)
        );

        form.date = "08/08/2026".to_string();
        assert_eq!(validate_booking_form(&form, today()), Ok(()));
    }

    #[test]
    fn test_build_booking_snapshots_catalog_entry() {
        let entry = make_entry();
        let booking = build_booking(&make_form(), &entry, 1754650000000, "2026-08-08T10:00:00.000Z".to_string());

        assert_eq!(booking.id, 1754650000000);
        assert_eq!(booking.service_id, "lash-classic");
        assert_eq!(booking.service_name, "Classic lash set");
        assert_eq!(booking.price, 55.0);
        assert_eq!(booking.deposit, 16.5);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(booking.paid_at, None);
    }

    #[test]
    fn test_build_booking_normalizes_optionals_and_notes() {
        let mut form = make_form();
        form.phone = "  ".to_string();
        form.email = " ana@example.com ".to_string();
        form.notes = String::new();

        let booking = build_booking(&form, &make_entry(), 1, "t".to_string());
        assert_eq!(booking.phone, None);
        assert_eq!(booking.email, Some("ana@example.com".to_string()));
        assert_eq!(booking.notes, NO_NOTES);

        form.notes = " allergic to latex ".to_string();
        let booking = build_booking(&form, &make_entry(), 2, "t".to_string());
        assert_eq!(booking.notes, "allergic to latex");
    }
}
