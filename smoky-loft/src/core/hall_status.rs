//! Hall status view
//!
//! One data-driven model behind every seating-chart rendering: each
//! table of the static layout paired with its status for the selected
//! slot. How the host paints it (flat, animated, 3D) is not the core's
//! concern.

use serde::{Deserialize, Serialize};

use shared::models::{HallTable, Reservation};

use super::booking_store::BookingStore;
use super::storage::StoragePort;
use crate::config::BusinessConfig;

/// Visual state of a table on the hall map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Free,
    Selected,
    Booked,
}

/// A table joined with its status for one `(date, time)` slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableView {
    #[serde(flatten)]
    pub table: HallTable,
    pub status: TableStatus,
}

/// Status of every table in the layout for the given slot.
///
/// Booked wins over selected: if the guest's current selection has been
/// taken meanwhile, the map shows it as taken.
pub fn hall_statuses<S: StoragePort>(
    config: &BusinessConfig,
    store: &BookingStore<S>,
    date: &str,
    time: &str,
    selected: Option<i64>,
) -> Vec<TableView> {
    config
        .hall
        .tables
        .iter()
        .map(|table| {
            let status = if store.is_table_taken(table.id, date, time) {
                TableStatus::Booked
            } else if selected == Some(table.id) {
                TableStatus::Selected
            } else {
                TableStatus::Free
            };
            TableView {
                table: table.clone(),
                status,
            }
        })
        .collect()
}

/// Data for the tap-on-table info card: the table itself plus the
/// reservation blocking it on that day, if any.
#[derive(Debug, Clone)]
pub struct TableInfo {
    pub table: HallTable,
    pub booking: Option<Reservation>,
}

pub fn table_info<S: StoragePort>(
    config: &BusinessConfig,
    store: &BookingStore<S>,
    table_id: i64,
    date: &str,
) -> Option<TableInfo> {
    let table = config.hall.table(table_id)?.clone();
    Some(TableInfo {
        booking: store.table_booking(table_id, date),
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;
    use shared::models::ReservationDraft;

    fn booked_store(table_id: i64) -> BookingStore<MemoryStorage> {
        let mut store = BookingStore::new(MemoryStorage::new());
        store.create(ReservationDraft {
            table_id,
            date: "Сегодня".to_string(),
            time: "18:00".to_string(),
            name: "Гость".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
        });
        store
    }

    #[test]
    fn test_statuses_cover_whole_layout() {
        let config = BusinessConfig::default();
        let store = booked_store(3);

        let views = hall_statuses(&config, &store, "Сегодня", "18:00", Some(5));
        assert_eq!(views.len(), config.hall.tables.len());

        let status_of = |id: i64| views.iter().find(|v| v.table.id == id).unwrap().status;
        assert_eq!(status_of(3), TableStatus::Booked);
        assert_eq!(status_of(5), TableStatus::Selected);
        assert_eq!(status_of(1), TableStatus::Free);
    }

    #[test]
    fn test_booked_wins_over_selected() {
        let config = BusinessConfig::default();
        let store = booked_store(3);

        let views = hall_statuses(&config, &store, "Сегодня", "18:00", Some(3));
        let view = views.iter().find(|v| v.table.id == 3).unwrap();
        assert_eq!(view.status, TableStatus::Booked);
    }

    #[test]
    fn test_other_slot_is_free() {
        let config = BusinessConfig::default();
        let store = booked_store(3);

        let views = hall_statuses(&config, &store, "Сегодня", "20:00", None);
        let view = views.iter().find(|v| v.table.id == 3).unwrap();
        assert_eq!(view.status, TableStatus::Free);
    }

    #[test]
    fn test_table_info_carries_blocking_booking() {
        let config = BusinessConfig::default();
        let store = booked_store(3);

        let info = table_info(&config, &store, 3, "Сегодня").unwrap();
        assert_eq!(info.booking.as_ref().unwrap().time, "18:00");

        let free = table_info(&config, &store, 5, "Сегодня").unwrap();
        assert!(free.booking.is_none());

        assert!(table_info(&config, &store, 99, "Сегодня").is_none());
    }
}
