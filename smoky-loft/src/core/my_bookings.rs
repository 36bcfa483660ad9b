//! Bookings panel ("Мои бронирования")
//!
//! Read model over the active reservations plus the two-step cancel
//! flow: a tap on "cancel" only arms a confirmation; the booking is
//! removed when the guest confirms. The double step is UX, not
//! concurrency control.

use shared::models::{HallTable, Reservation};

use super::booking_store::BookingStore;
use super::storage::StoragePort;
use crate::config::BusinessConfig;
use crate::events::{AppEvent, ToastEvent};

/// One panel row: the reservation joined with its hall table, when the
/// table still exists in the layout.
#[derive(Debug, Clone)]
pub struct BookingEntry {
    pub reservation: Reservation,
    pub table: Option<HallTable>,
}

/// Result of a confirmed cancellation.
#[derive(Debug, Clone)]
pub struct CancelOutcome {
    pub cancelled: bool,
    pub toast: ToastEvent,
    pub event: Option<AppEvent>,
}

/// Panel state: the loaded snapshot and the armed confirmation, if any.
#[derive(Debug, Default)]
pub struct BookingsPanel {
    entries: Vec<BookingEntry>,
    confirming: Option<String>,
}

impl BookingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the active reservations (called on open and after changes).
    pub fn refresh<S: StoragePort>(&mut self, store: &BookingStore<S>, config: &BusinessConfig) {
        self.entries = store
            .active_reservations()
            .into_iter()
            .map(|reservation| BookingEntry {
                table: config.hall.table(reservation.table_id).cloned(),
                reservation,
            })
            .collect();
        self.confirming = None;
    }

    pub fn entries(&self) -> &[BookingEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The booking an armed confirmation points at.
    pub fn confirming(&self) -> Option<&str> {
        self.confirming.as_deref()
    }

    /// Arm the confirmation for one booking ("Точно отменить?").
    pub fn request_cancel(&mut self, id: &str) {
        if self.entries.iter().any(|e| e.reservation.id == id) {
            self.confirming = Some(id.to_string());
        }
    }

    /// Disarm ("Нет, оставить").
    pub fn keep(&mut self) {
        self.confirming = None;
    }

    /// Perform the armed cancellation ("Да, отменить").
    pub fn confirm_cancel<S: StoragePort>(
        &mut self,
        store: &mut BookingStore<S>,
        config: &BusinessConfig,
    ) -> CancelOutcome {
        let Some(id) = self.confirming.take() else {
            return CancelOutcome {
                cancelled: false,
                toast: ToastEvent::error("Бронь не выбрана"),
                event: None,
            };
        };

        let cancelled = store.cancel(&id);
        self.refresh(store, config);

        if cancelled {
            CancelOutcome {
                cancelled: true,
                toast: ToastEvent::success("Бронь отменена"),
                event: Some(AppEvent::BookingCancelled { id }),
            }
        } else {
            // Already gone (e.g. cancelled in another tab) - nothing to do
            CancelOutcome {
                cancelled: false,
                toast: ToastEvent::error("Бронь уже отменена"),
                event: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;

    fn seeded() -> (BookingStore<MemoryStorage>, BusinessConfig) {
        let mut store = BookingStore::new(MemoryStorage::new());
        store.seed_once();
        (store, BusinessConfig::default())
    }

    #[test]
    fn test_refresh_joins_table_info() {
        let (store, config) = seeded();
        let mut panel = BookingsPanel::new();
        panel.refresh(&store, &config);

        assert_eq!(panel.entries().len(), 6);
        let vip = panel
            .entries()
            .iter()
            .find(|e| e.reservation.table_id == 7)
            .unwrap();
        assert!(vip.table.is_some());
    }

    #[test]
    fn test_two_step_cancel() {
        let (mut store, config) = seeded();
        let mut panel = BookingsPanel::new();
        panel.refresh(&store, &config);

        let id = panel.entries()[0].reservation.id.clone();
        panel.request_cancel(&id);
        assert_eq!(panel.confirming(), Some(id.as_str()));

        // "Нет, оставить" disarms without touching the store
        panel.keep();
        assert_eq!(panel.confirming(), None);
        assert_eq!(store.list().len(), 6);

        panel.request_cancel(&id);
        let outcome = panel.confirm_cancel(&mut store, &config);
        assert!(outcome.cancelled);
        assert_eq!(
            outcome.event,
            Some(AppEvent::BookingCancelled { id: id.clone() })
        );
        assert_eq!(store.list().len(), 5);
        assert_eq!(panel.entries().len(), 5);
        assert!(store.find_by_id(&id).is_none());
    }

    #[test]
    fn test_request_cancel_unknown_id_does_not_arm() {
        let (store, config) = seeded();
        let mut panel = BookingsPanel::new();
        panel.refresh(&store, &config);

        panel.request_cancel("no-such-id");
        assert_eq!(panel.confirming(), None);
    }

    #[test]
    fn test_confirm_without_arming_is_noop() {
        let (mut store, config) = seeded();
        let mut panel = BookingsPanel::new();
        panel.refresh(&store, &config);

        let outcome = panel.confirm_cancel(&mut store, &config);
        assert!(!outcome.cancelled);
        assert_eq!(store.list().len(), 6);
    }
}
