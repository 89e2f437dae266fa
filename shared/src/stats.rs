//! Aggregate statistics over the full (unfiltered) booking list.
//!
//! Purely derived, recomputed on every mutation; nothing here is persisted.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::filters::week_span;
use crate::{Booking, CatalogEntry};

/// One category's share of the booking total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    /// Percentage of all bookings, 0–100
    pub pct: f64,
}

/// A service name with its booking frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopService {
    pub name: String,
    pub count: usize,
}

/// Everything the stats panel renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AgendaStats {
    pub total: usize,
    pub due_today: usize,
    /// Monday–Sunday week containing today
    pub due_this_week: usize,
    pub due_this_month: usize,
    /// Sum of every booking's price snapshot
    pub total_revenue: f64,
    /// Sum of deposits over paid bookings only
    pub collected_deposits: f64,
    /// Ordered by count descending, then name
    pub categories: Vec<CategoryShare>,
    /// Top 5 most-booked service names by frequency
    pub top_services: Vec<TopService>,
}

/// Category a booking counts toward: resolved through the catalog, with a
/// bucket for bookings whose service has since left the catalog.
const ORPHAN_CATEGORY: &str = "Other";

pub fn compute_stats(bookings: &[Booking], catalog: &[CatalogEntry], today: NaiveDate) -> AgendaStats {
    let (monday, sunday) = week_span(today);

    let mut stats = AgendaStats {
        total: bookings.len(),
        ..AgendaStats::default()
    };

    let mut by_category: HashMap<String, usize> = HashMap::new();
    let mut by_service: HashMap<&str, usize> = HashMap::new();

    for booking in bookings {
        if let Some(day) = booking.day() {
            if day == today {
                stats.due_today += 1;
            }
            if day >= monday && day <= sunday {
                stats.due_this_week += 1;
            }
            if day.month() == today.month() && day.year() == today.year() {
                stats.due_this_month += 1;
            }
        }

        stats.total_revenue += booking.price;
        if booking.is_paid() {
            stats.collected_deposits += booking.deposit;
        }

        let category = catalog
            .iter()
            .find(|e| e.id == booking.service_id)
            .map(|e| e.category.as_str())
            .unwrap_or(ORPHAN_CATEGORY);
        *by_category.entry(category.to_string()).or_insert(0) += 1;
        *by_service.entry(booking.service_name.as_str()).or_insert(0) += 1;
    }

    let total = stats.total.max(1) as f64;
    stats.categories = by_category
        .into_iter()
        .map(|(category, count)| CategoryShare {
            pct: count as f64 * 100.0 / total,
            category,
            count,
        })
        .collect();
    stats
        .categories
        .sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));

    let mut services: Vec<TopService> = by_service
        .into_iter()
        .map(|(name, count)| TopService {
            name: name.to_string(),
            count,
        })
        .collect();
    services.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    services.truncate(5);
    stats.top_services = services;

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaymentStatus;

    fn make_booking(id: i64, date: &str, service_id: &str, service: &str, paid: bool) -> Booking {
        Booking {
            id,
            date: date.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Suarez".to_string(),
            phone: None,
            email: None,
            service_id: service_id.to_string(),
            service_name: service.to_string(),
            price: 50.0,
            deposit: 15.0,
            notes: String::new(),
            sms_reminder: false,
            payment_status: if paid {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Pending
            },
            created_at: "2026-08-01T10:00:00.000Z".to_string(),
            paid_at: paid.then(|| "2026-08-02T10:00:00.000Z".to_string()),
        }
    }

    fn make_entry(id: &str, category: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: id.to_string(),
            category: category.to_string(),
            subcategory: None,
            duration_min: 60,
            price: 50.0,
            deposit: 15.0,
            deposit_pct: 30,
            description: String::new(),
            popular: false,
        }
    }

    fn today() -> NaiveDate {
        // Saturday 8 August 2026; its week is 3–9 August
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
    }

    #[test]
    fn test_empty_list_yields_zeroed_stats() {
        let stats = compute_stats(&[], &[], today());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert!(stats.categories.is_empty());
        assert!(stats.top_services.is_empty());
    }

    #[test]
    fn test_date_buckets() {
        let catalog = vec![make_entry("svc", "Lashes")];
        let bookings = vec![
            make_booking(1, "08/08/2026", "svc", "A", false), // today
            make_booking(2, "09/08/2026", "svc", "A", false), // this week (Sunday)
            make_booking(3, "20/08/2026", "svc", "A", false), // this month only
            make_booking(4, "02/09/2026", "svc", "A", false), // next month
            make_booking(5, "broken", "svc", "A", false),     // no date bucket
        ];

        let stats = compute_stats(&bookings, &catalog, today());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.due_today, 1);
        assert_eq!(stats.due_this_week, 2);
        assert_eq!(stats.due_this_month, 3);
    }

    #[test]
    fn test_revenue_and_collected_deposits() {
        let catalog = vec![make_entry("svc", "Lashes")];
        let bookings = vec![
            make_booking(1, "08/08/2026", "svc", "A", true),
            make_booking(2, "09/08/2026", "svc", "A", false),
            make_booking(3, "10/08/2026", "svc", "A", true),
        ];

        let stats = compute_stats(&bookings, &catalog, today());
        assert_eq!(stats.total_revenue, 150.0);
        // Deposits only count once paid
        assert_eq!(stats.collected_deposits, 30.0);
    }

    #[test]
    fn test_category_distribution_percentages() {
        let catalog = vec![make_entry("lash", "Lashes"), make_entry("mani", "Nails")];
        let bookings = vec![
            make_booking(1, "08/08/2026", "lash", "A", false),
            make_booking(2, "08/08/2026", "lash", "A", false),
            make_booking(3, "08/08/2026", "lash", "A", false),
            make_booking(4, "08/08/2026", "gone", "B", false), // orphaned service
        ];

        let stats = compute_stats(&bookings, &catalog, today());
        assert_eq!(stats.categories.len(), 2);
        assert_eq!(stats.categories[0].category, "Lashes");
        assert_eq!(stats.categories[0].count, 3);
        assert_eq!(stats.categories[0].pct, 75.0);
        assert_eq!(stats.categories[1].category, "Other");
        assert_eq!(stats.categories[1].pct, 25.0);
    }

    #[test]
    fn test_top_services_capped_at_five() {
        let catalog = vec![make_entry("svc", "Lashes")];
        let mut bookings = Vec::new();
        let names = ["A", "B", "C", "D", "E", "F"];
        for (i, name) in names.iter().enumerate() {
            // service "A" booked 7 times, "B" 6 times, ... "F" twice
            for j in 0..(7 - i) {
                bookings.push(make_booking(
                    (i * 10 + j) as i64,
                    "08/08/2026",
                    "svc",
                    name,
                    false,
                ));
            }
        }

        let stats = compute_stats(&bookings, &catalog, today());
        assert_eq!(stats.top_services.len(), 5);
        assert_eq!(stats.top_services[0].name, "A");
        assert_eq!(stats.top_services[0].count, 7);
        assert_eq!(stats.top_services[4].name, "E");
        assert!(stats.top_services.iter().all(|s| s.name != "F"));
    }
}
