//! Frontend-facing event payloads
//!
//! The core never renders; it hands the host UI serializable payloads.
//! Toasts are transient notifications - the two-second auto-dismiss
//! timer lives in the host, not here.

use serde::{Deserialize, Serialize};

use shared::models::Reservation;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification for the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastEvent {
    pub message: String,
    pub kind: ToastKind,
}

impl ToastEvent {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// App-level events emitted by the booking core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    BookingConfirmed {
        id: String,
        #[serde(rename = "tableId")]
        table_id: i64,
        date: String,
        time: String,
    },
    BookingCancelled {
        id: String,
    },
    CartUpdated {
        count: usize,
        total: i64,
    },
}

impl AppEvent {
    pub fn booking_confirmed(reservation: &Reservation) -> Self {
        AppEvent::BookingConfirmed {
            id: reservation.id.clone(),
            table_id: reservation.table_id,
            date: reservation.date.clone(),
            time: reservation.time.clone(),
        }
    }
}
