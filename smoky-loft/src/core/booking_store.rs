//! Booking store
//!
//! Durable CRUD over the reservation collection plus the advisory
//! availability reads the table-selection step renders from.
//!
//! The whole collection lives under one storage key as a JSON array.
//! Reads fail soft: missing or corrupt storage degrades to an empty
//! store, never to an error — the UI stays available. Availability
//! checks are reads only; `create` does not re-check, so two sessions
//! against the same storage can double-book. That race is accepted,
//! not prevented.

use shared::models::{Reservation, ReservationDraft};
use shared::util::{booking_id, now_rfc3339, phones_match};

use super::storage::StoragePort;

/// Storage key of the reservation collection.
pub const BOOKINGS_KEY: &str = "smoky_loft_bookings";

/// Reservation collection over a storage port.
pub struct BookingStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> BookingStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn load(&self) -> Vec<Reservation> {
        match self.storage.get(BOOKINGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Corrupt bookings document, treating as empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::debug!(error = %e, "Bookings storage unavailable, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, bookings: &[Reservation]) {
        let raw = match serde_json::to_string(bookings) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode bookings");
                return;
            }
        };
        if let Err(e) = self.storage.set(BOOKINGS_KEY, &raw) {
            tracing::warn!(error = %e, "Failed to persist bookings");
        }
    }

    /// All stored reservations.
    pub fn list(&self) -> Vec<Reservation> {
        self.load()
    }

    /// Append a reservation, assigning `id` and `createdAt`.
    ///
    /// Field shapes are the caller's responsibility (the wizard gates on
    /// them); no conflict check is performed against existing records.
    pub fn create(&mut self, draft: ReservationDraft) -> Reservation {
        let reservation = Reservation {
            id: booking_id(),
            table_id: draft.table_id,
            date: draft.date,
            time: draft.time,
            name: draft.name,
            phone: draft.phone,
            created_at: now_rfc3339(),
        };

        let mut bookings = self.load();
        bookings.push(reservation.clone());
        self.save(&bookings);

        tracing::debug!(
            id = %reservation.id,
            table_id = reservation.table_id,
            date = %reservation.date,
            time = %reservation.time,
            "Reservation created"
        );

        reservation
    }

    /// Remove the reservation with the given ID.
    ///
    /// Returns whether a record was found and removed; absent IDs are not
    /// an error.
    pub fn cancel(&mut self, id: &str) -> bool {
        let mut bookings = self.load();
        let before = bookings.len();
        bookings.retain(|b| b.id != id);

        if bookings.len() == before {
            return false;
        }

        self.save(&bookings);
        tracing::debug!(id = %id, "Reservation cancelled");
        true
    }

    pub fn find_by_id(&self, id: &str) -> Option<Reservation> {
        self.load().into_iter().find(|b| b.id == id)
    }

    /// Reservations with an exact day-label match.
    pub fn for_date(&self, date: &str) -> Vec<Reservation> {
        self.load().into_iter().filter(|b| b.date == date).collect()
    }

    /// Reservations whose phone matches digit-wise (same number in any
    /// formatting).
    pub fn for_phone(&self, phone: &str) -> Vec<Reservation> {
        self.load()
            .into_iter()
            .filter(|b| phones_match(&b.phone, phone))
            .collect()
    }

    /// First reservation for a table on a date, if any. Backs the
    /// tap-on-table info card.
    pub fn table_booking(&self, table_id: i64, date: &str) -> Option<Reservation> {
        self.load()
            .into_iter()
            .find(|b| b.table_id == table_id && b.date == date)
    }

    /// Advisory availability check: exact match on table, day and slot.
    ///
    /// Used to render table state, not to gate `create`.
    pub fn is_table_taken(&self, table_id: i64, date: &str, time: &str) -> bool {
        self.load()
            .iter()
            .any(|b| b.table_id == table_id && b.date == date && b.time == time)
    }

    /// Reservations whose day label is still in the active set. Records
    /// with any other label are excluded but not deleted.
    pub fn active_reservations(&self) -> Vec<Reservation> {
        self.load().into_iter().filter(|b| b.is_active()).collect()
    }

    /// Physically drop reservations whose day label fell out of the
    /// active set. Returns the number removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let mut bookings = self.load();
        let before = bookings.len();
        bookings.retain(|b| b.is_active());
        let removed = before - bookings.len();
        if removed > 0 {
            self.save(&bookings);
            tracing::debug!(removed, "Expired reservations dropped");
        }
        removed
    }

    /// Insert demonstration records iff the store is empty.
    ///
    /// Returns the number of records inserted (0 when data already
    /// exists, so repeated calls are no-ops).
    pub fn seed_once(&mut self) -> usize {
        if !self.load().is_empty() {
            return 0;
        }

        let demo: [(i64, &str, &str, &str, &str); 6] = [
            (3, "Сегодня", "18:00", "Александр К.", "+7 (999) 123-45-67"),
            (7, "Сегодня", "20:00", "VIP Гость", "+7 (999) 000-00-00"),
            (1, "Сегодня", "22:00", "Дмитрий", "+7 (999) 777-88-99"),
            (4, "Завтра", "16:00", "Мария С.", "+7 (999) 555-33-22"),
            (5, "Завтра", "18:00", "Компания \"Дружба\"", "+7 (999) 111-22-33"),
            (7, "Завтра", "22:00", "VIP День Рождения", "+7 (999) 444-55-66"),
        ];

        for (table_id, date, time, name, phone) in demo {
            self.create(ReservationDraft {
                table_id,
                date: date.to_string(),
                time: time.to_string(),
                name: name.to_string(),
                phone: phone.to_string(),
            });
        }

        tracing::debug!("Demo reservations seeded");
        demo.len()
    }

    /// Delete the entire collection unconditionally.
    pub fn purge(&mut self) {
        if let Err(e) = self.storage.remove(BOOKINGS_KEY) {
            tracing::warn!(error = %e, "Failed to purge bookings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;
    use shared::models::ACTIVE_DATES;

    fn store() -> BookingStore<MemoryStorage> {
        BookingStore::new(MemoryStorage::new())
    }

    fn draft(table_id: i64, date: &str, time: &str) -> ReservationDraft {
        ReservationDraft {
            table_id,
            date: date.to_string(),
            time: time.to_string(),
            name: "Ann".to_string(),
            phone: "+7 (999) 000-00-00".to_string(),
        }
    }

    #[test]
    fn test_create_then_list_exactly_once() {
        let mut store = store();
        let created = store.create(draft(3, "Сегодня", "18:00"));

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
        assert!(!created.id.is_empty());
        assert!(!created.created_at.is_empty());
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = store();
        for _ in 0..20 {
            store.create(draft(1, "Сегодня", "18:00"));
        }
        let mut ids: Vec<String> = store.list().into_iter().map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_cancel_removes_record() {
        let mut store = store();
        let a = store.create(draft(1, "Сегодня", "18:00"));
        let b = store.create(draft(2, "Сегодня", "20:00"));

        assert!(store.cancel(&a.id));
        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert!(listed.iter().all(|r| r.id != a.id));
        assert_eq!(listed[0].id, b.id);
    }

    #[test]
    fn test_cancel_absent_id_is_noop() {
        let mut store = store();
        store.create(draft(1, "Сегодня", "18:00"));

        assert!(!store.cancel("no-such-id"));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_is_table_taken_follows_lifecycle() {
        let mut store = store();
        assert!(!store.is_table_taken(3, "Сегодня", "18:00"));

        let created = store.create(draft(3, "Сегодня", "18:00"));
        assert!(store.is_table_taken(3, "Сегодня", "18:00"));
        // Exact match on all three fields
        assert!(!store.is_table_taken(3, "Сегодня", "20:00"));
        assert!(!store.is_table_taken(3, "Завтра", "18:00"));
        assert!(!store.is_table_taken(4, "Сегодня", "18:00"));

        store.cancel(&created.id);
        assert!(!store.is_table_taken(3, "Сегодня", "18:00"));
    }

    #[test]
    fn test_double_booking_is_not_prevented() {
        // Advisory model: create never checks for conflicts.
        let mut store = store();
        store.create(draft(3, "Сегодня", "18:00"));
        store.create(draft(3, "Сегодня", "18:00"));
        assert_eq!(store.for_date("Сегодня").len(), 2);
    }

    #[test]
    fn test_active_reservations_filters_stale_labels() {
        let mut store = store();
        store.create(draft(1, "Сегодня", "18:00"));
        store.create(draft(2, "Послезавтра", "20:00"));
        store.create(draft(3, "2024-01-01", "18:00"));
        store.create(draft(4, "", "18:00"));

        let active = store.active_reservations();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|b| ACTIVE_DATES.contains(&b.date.as_str())));
        // Stale records stay in the store
        assert_eq!(store.list().len(), 4);
    }

    #[test]
    fn test_cleanup_expired_rewrites_collection() {
        let mut store = store();
        store.create(draft(1, "Сегодня", "18:00"));
        store.create(draft(3, "2024-01-01", "18:00"));

        assert_eq!(store.cleanup_expired(), 1);
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.cleanup_expired(), 0);
    }

    #[test]
    fn test_for_phone_matches_formatting_variants() {
        let mut store = store();
        store.create(draft(1, "Сегодня", "18:00"));

        assert_eq!(store.for_phone("8 999 000 00 00").len(), 1);
        assert_eq!(store.for_phone("+7 (999) 000-00-00").len(), 1);
        assert_eq!(store.for_phone("+7 (999) 111-11-11").len(), 0);
    }

    #[test]
    fn test_table_booking_lookup() {
        let mut store = store();
        let created = store.create(draft(5, "Завтра", "18:00"));

        assert_eq!(store.table_booking(5, "Завтра").unwrap().id, created.id);
        assert!(store.table_booking(5, "Сегодня").is_none());
    }

    #[test]
    fn test_seed_once_is_idempotent() {
        let mut store = store();
        assert_eq!(store.seed_once(), 6);
        let count = store.list().len();
        assert_eq!(count, 6);

        assert_eq!(store.seed_once(), 0);
        assert_eq!(store.list().len(), count);
    }

    #[test]
    fn test_purge_empties_store() {
        let mut store = store();
        store.seed_once();
        store.purge();
        assert!(store.list().is_empty());
        // Seeding works again after a purge
        assert_eq!(store.seed_once(), 6);
    }

    #[test]
    fn test_corrupt_storage_degrades_to_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(BOOKINGS_KEY, "{not json").unwrap();

        let store = BookingStore::new(storage);
        assert!(store.list().is_empty());
    }
}
