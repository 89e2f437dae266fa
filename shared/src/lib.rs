use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub mod calendar;
pub mod export;
pub mod filters;
pub mod stats;
pub mod store;
pub mod validate;

/// A purchasable service from the catalog document.
///
/// Entries are immutable after load and owned by the catalog loader; every
/// other component reads them by reference. Wire keys keep the legacy
/// (Spanish) names of `data/services.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "subcategoria", default)]
    pub subcategory: Option<String>,
    /// Duration in minutes
    #[serde(rename = "duracion")]
    pub duration_min: u32,
    #[serde(rename = "precio")]
    pub price: f64,
    /// Deposit charged at booking time
    #[serde(rename = "senia")]
    pub deposit: f64,
    #[serde(rename = "porcentaje_senia")]
    pub deposit_pct: u32,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(default)]
    pub popular: bool,
}

/// Studio-wide configuration loaded alongside the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioConfig {
    #[serde(rename = "senia_minima")]
    pub min_deposit: f64,
    #[serde(rename = "porcentaje_senia_default")]
    pub default_deposit_pct: u32,
    #[serde(rename = "politica_cancelacion", default)]
    pub cancellation_policy: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            min_deposit: 8.0,
            default_deposit_pct: 30,
            cancellation_policy: String::new(),
        }
    }
}

/// The catalog document fetched from `data/services.json` at startup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(rename = "servicios", default)]
    pub services: Vec<CatalogEntry>,
    #[serde(rename = "configuracion", default)]
    pub config: StudioConfig,
}

impl CatalogDocument {
    /// Fallback used when the document cannot be fetched or parsed:
    /// zero services, conservative deposit defaults.
    pub fn fallback() -> Self {
        Self::default()
    }

    /// Look up a catalog entry by its stable identifier.
    pub fn entry(&self, service_id: &str) -> Option<&CatalogEntry> {
        self.services.iter().find(|e| e.id == service_id)
    }

    /// Distinct category names, in catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for entry in &self.services {
            if !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        categories
    }
}

/// Payment state of a booking's deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "paid")]
    Paid,
}

impl PaymentStatus {
    /// The wire/report label, matching the persisted `estadoPago` values.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
        }
    }
}

/// A scheduled appointment.
///
/// `price` and `deposit` are denormalized copies taken from the chosen
/// [`CatalogEntry`] at booking time; later catalog edits never touch them.
/// The id is the creation timestamp in epoch milliseconds; unique among
/// current bookings unless two are created in the same millisecond, which is
/// accepted risk rather than guarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// Canonical `DD/MM/YYYY` day string
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "servicioId")]
    pub service_id: String,
    #[serde(rename = "servicio")]
    pub service_name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "senia")]
    pub deposit: f64,
    #[serde(rename = "notas", default)]
    pub notes: String,
    #[serde(rename = "recordatorioSms", default)]
    pub sms_reminder: bool,
    #[serde(rename = "estadoPago")]
    pub payment_status: PaymentStatus,
    /// RFC 3339 creation timestamp
    #[serde(rename = "fechaCreacion")]
    pub created_at: String,
    /// RFC 3339 payment timestamp, absent until the deposit is paid
    #[serde(rename = "fechaPago", default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
}

impl Booking {
    pub fn client_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// The booking's day, if its stored string still parses.
    ///
    /// Data restored from storage is trusted verbatim, so a booking may carry
    /// a date this returns `None` for; date-keyed features simply skip it.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

/// Parse a canonical `DD/MM/YYYY` day string into a civil date.
///
/// Strict: exactly two/two/four digit groups and a real calendar day.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let (d, m, y) = (parts[0], parts[1], parts[2]);
    if d.len() != 2 || m.len() != 2 || y.len() != 4 {
        return None;
    }
    if !parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    let day = d.parse().ok()?;
    let month = m.parse().ok()?;
    let year = y.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a civil date as the canonical `DD/MM/YYYY` day string.
pub fn format_day(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_canonical() {
        assert_eq!(parse_day("08/08/2026"), NaiveDate::from_ymd_opt(2026, 8, 8));
        assert_eq!(
            parse_day("31/12/2025"),
            NaiveDate::from_ymd_opt(2025, 12, 31)
        );
    }

    #[test]
    fn test_parse_day_rejects_malformed() {
        // Legacy DD/MM strings are not canonical
        assert_eq!(parse_day("08/08"), None);
        assert_eq!(parse_day("8/8/2026"), None);
        assert_eq!(parse_day("2026-08-08"), None);
        assert_eq!(parse_day("aa/bb/cccc"), None);
        assert_eq!(parse_day(""), None);
        // Pattern-valid but not a real calendar day
        assert_eq!(parse_day("31/02/2026"), None);
    }

    #[test]
    fn test_format_day_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let formatted = format_day(date);
        assert_eq!(formatted, "05/03/2026");
        assert_eq!(parse_day(&formatted), Some(date));
    }

    #[test]
    fn test_catalog_entry_lookup_and_categories() {
        let doc = CatalogDocument {
            services: vec![
                make_entry("lash-classic", "Classic lash set", "Lashes"),
                make_entry("lash-volume", "Volume lash set", "Lashes"),
                make_entry("brow-lam", "Brow lamination", "Brows"),
            ],
            config: StudioConfig::default(),
        };

        assert_eq!(doc.entry("brow-lam").unwrap().name, "Brow lamination");
        assert!(doc.entry("missing").is_none());
        assert_eq!(doc.categories(), vec!["Lashes", "Brows"]);
    }

    #[test]
    fn test_catalog_fallback_defaults() {
        let doc = CatalogDocument::fallback();
        assert!(doc.services.is_empty());
        assert_eq!(doc.config.min_deposit, 8.0);
        assert_eq!(doc.config.default_deposit_pct, 30);
        assert!(doc.config.cancellation_policy.is_empty());
    }

    #[test]
    fn test_catalog_document_legacy_keys() {
        let raw = r#"{
            "servicios": [{
                "id": "lash-classic",
                "nombre": "Classic lash set",
                "categoria": "Lashes",
                "duracion": 90,
                "precio": 55.0,
                "senia": 16.5,
                "porcentaje_senia": 30
            }],
            "configuracion": {
                "senia_minima": 8.0,
                "porcentaje_senia_default": 30,
                "politica_cancelacion": "Deposits are non-refundable."
            }
        }"#;

        let doc: CatalogDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.services.len(), 1);
        assert_eq!(doc.services[0].duration_min, 90);
        assert_eq!(doc.services[0].subcategory, None);
        assert!(!doc.services[0].popular);
        assert_eq!(doc.config.cancellation_policy, "Deposits are non-refundable.");
    }

    #[test]
    fn test_booking_legacy_keys() {
        let booking = Booking {
            id: 1754650000000,
            date: "10/08/2026".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Suarez".to_string(),
            phone: None,
            email: None,
            service_id: "lash-classic".to_string(),
            service_name: "Classic lash set".to_string(),
            price: 55.0,
            deposit: 16.5,
            notes: String::new(),
            sms_reminder: false,
            payment_status: PaymentStatus::Pending,
            created_at: "2026-08-08T10:00:00.000Z".to_string(),
            paid_at: None,
        };

        let json = serde_json::to_string(&booking).unwrap();
        assert!(json.contains("\"estadoPago\":\"pending\""));
        assert!(json.contains("\"fecha\":\"10/08/2026\""));
        // Absent optionals stay absent on the wire
        assert!(!json.contains("fechaPago"));
        assert!(!json.contains("telefono"));

        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(back, booking);
    }

    fn make_entry(id: &str, name: &str, category: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
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
}
