//! The appointment store: a single key-value slot holding the whole booking
//! list as one JSON array, overwritten wholesale on every mutation.
//!
//! The slot itself sits behind [`BookingStorage`] so the UI layer can hold
//! any backend (localStorage in the browser, [`MemoryStorage`] in tests)
//! without touching the list operations. Loads never fail (an absent or
//! unparsable snapshot is "no data"), but writes report failure explicitly
//! so the widget can warn instead of silently dropping a booking.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

use crate::{Booking, PaymentStatus};

/// A storage write that did not take effect (quota, serialization, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageError(pub String);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage write failed: {}", self.0)
    }
}

impl std::error::Error for StorageError {}

/// Abstraction over the persisted booking snapshot.
pub trait BookingStorage {
    /// Read the whole snapshot. Absent or unparsable content loads as an
    /// empty list, never an error; restored data is trusted verbatim.
    fn load(&self) -> Vec<Booking>;

    /// Serialize and write the entire list, replacing any previous snapshot.
    fn save_all(&self, bookings: &[Booking]) -> Result<(), StorageError>;

    /// Drop the snapshot entirely.
    fn clear(&self) -> Result<(), StorageError> {
        self.save_all(&[])
    }
}

/// Decode a raw snapshot; anything unparsable is treated as no data.
pub fn decode_snapshot(raw: &str) -> Vec<Booking> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encode the list the way every backend stores it.
pub fn encode_snapshot(bookings: &[Booking]) -> Result<String, StorageError> {
    serde_json::to_string(bookings).map_err(|e| StorageError(e.to_string()))
}

/// In-memory storage backend. Round-trips through the same JSON codec as the
/// real slot so tests exercise the actual wire format.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw content, bypassing the codec (for tests of the
    /// unparsable-snapshot path).
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: RefCell::new(Some(raw.to_string())),
        }
    }
}

impl BookingStorage for MemoryStorage {
    fn load(&self) -> Vec<Booking> {
        match self.slot.borrow().as_deref() {
            Some(raw) => decode_snapshot(raw),
            None => Vec::new(),
        }
    }

    fn save_all(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        let encoded = encode_snapshot(bookings)?;
        *self.slot.borrow_mut() = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

// ── List operations ──
//
// The only mutation paths for the in-memory list. Callers persist the result
// via `save_all` before re-rendering.

/// Append a newly confirmed booking.
pub fn add_booking(bookings: &mut Vec<Booking>, booking: Booking) {
    bookings.push(booking);
}

/// Remove a booking by id. Removing a nonexistent id is a no-op.
/// Returns whether anything was removed.
pub fn remove_booking(bookings: &mut Vec<Booking>, id: i64) -> bool {
    let before = bookings.len();
    bookings.retain(|b| b.id != id);
    bookings.len() != before
}

/// Flip a pending booking to paid and stamp the payment timestamp.
/// A missing id or an already-paid booking is a no-op; returns whether the
/// state changed.
pub fn mark_paid(bookings: &mut [Booking], id: i64, paid_at: String) -> bool {
    match bookings.iter_mut().find(|b| b.id == id) {
        Some(booking) if booking.payment_status == PaymentStatus::Pending => {
            booking.payment_status = PaymentStatus::Paid;
            booking.paid_at = Some(paid_at);
            true
        }
        _ => false,
    }
}
