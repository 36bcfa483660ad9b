//! Reservation Model

use serde::{Deserialize, Serialize};

/// Day labels a booking can be made for.
///
/// These are symbolic labels, not calendar dates: a stored reservation
/// whose `date` is no longer one of them is treated as expired.
pub const ACTIVE_DATES: [&str; 3] = ["Сегодня", "Завтра", "Послезавтра"];

/// Bookable time slots (venue opens at 14:00, last slot past midnight).
pub const TIME_SLOTS: [&str; 6] = ["14:00", "16:00", "18:00", "20:00", "22:00", "00:00"];

/// Reservation entity (the sole persisted record of the booking store)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    /// Time-based unique ID, assigned by the store at creation
    pub id: String,
    /// References a table in the hall layout
    #[serde(rename = "tableId")]
    pub table_id: i64,
    /// Symbolic day label, see [`ACTIVE_DATES`]
    pub date: String,
    /// Time slot, see [`TIME_SLOTS`]
    pub time: String,
    pub name: String,
    pub phone: String,
    /// RFC 3339 creation timestamp, informational only
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Reservation {
    /// Whether this reservation's day label is still in the active set.
    pub fn is_active(&self) -> bool {
        ACTIVE_DATES.contains(&self.date.as_str())
    }
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDraft {
    #[serde(rename = "tableId")]
    pub table_id: i64,
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
}
