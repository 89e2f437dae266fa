use gloo::storage::{LocalStorage, Storage};
use shared::store::{BookingStorage, StorageError};
use shared::Booking;

/// The single localStorage slot holding the JSON-serialized booking array.
const STORAGE_KEY: &str = "agendapro_bookings";

/// Browser-persisted implementation of [`BookingStorage`].
///
/// The snapshot is overwritten wholesale on every mutation and read wholesale
/// at startup; there is no merging or versioning.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalBookingStorage;

impl BookingStorage for LocalBookingStorage {
    fn load(&self) -> Vec<Booking> {
        // Absent or unparsable content is "no data", not an error
        LocalStorage::get(STORAGE_KEY).unwrap_or_default()
    }

    fn save_all(&self, bookings: &[Booking]) -> Result<(), StorageError> {
        LocalStorage::set(STORAGE_KEY, bookings).map_err(|e| StorageError(e.to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        LocalStorage::delete(STORAGE_KEY);
        Ok(())
    }
}
