//! Booking wizard
//!
//! Step-gated selection state machine: schedule (day + slot), table,
//! contact details. Forward transitions are guarded; backward ones are
//! always allowed and keep entered data. Opening the wizard always
//! discards whatever a prior abandoned session left behind.
//!
//! Availability is only consulted here, never enforced at write time:
//! `confirm` commits whatever the guards let through.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::models::{Reservation, ReservationDraft, ACTIVE_DATES, TIME_SLOTS};

use super::booking_store::BookingStore;
use super::cart::Cart;
use super::handoff::{handoff_url, render_booking_message};
use super::storage::StoragePort;
use crate::config::BusinessConfig;
use crate::events::{AppEvent, ToastEvent};
use crate::utils::phone::format_phone_input;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Wizard is not open")]
    NotOpen,

    #[error("Action does not belong to the current step")]
    WrongStep,

    #[error("Unknown day label: {0}")]
    UnknownDate(String),

    #[error("Unknown time slot: {0}")]
    UnknownTime(String),

    #[error("Both day and time must be selected")]
    IncompleteSchedule,

    #[error("No table selected")]
    NoTableSelected,

    #[error("Table {0} is not in the hall layout")]
    UnknownTable(i64),

    #[error("Table {0} is already taken for the selected slot")]
    TableTaken(i64),

    #[error("Name and phone are required")]
    MissingContact,
}

/// Wizard steps, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    SelectingSchedule,
    SelectingTable,
    EnteringContact,
}

/// Transient selections of an open wizard session.
#[derive(Debug, Clone, Default)]
struct WizardDraft {
    date: Option<String>,
    time: Option<String>,
    table_id: Option<i64>,
    name: String,
    phone: String,
}

/// Result of a confirmed booking: the committed record, the deep link
/// for the host to open, and the toast for the host UI.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub reservation: Reservation,
    pub handoff_url: String,
    pub toast: ToastEvent,
    pub event: AppEvent,
}

/// The multi-step booking flow. Closed until `open` is called.
#[derive(Debug, Default)]
pub struct BookingWizard {
    session: Option<(WizardStep, WizardDraft)>,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the wizard, discarding any prior selections.
    pub fn open(&mut self) {
        self.session = Some((WizardStep::SelectingSchedule, WizardDraft::default()));
    }

    /// Close the wizard, discarding selections.
    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn step(&self) -> Option<WizardStep> {
        self.session.as_ref().map(|(step, _)| *step)
    }

    pub fn date(&self) -> Option<&str> {
        self.session.as_ref().and_then(|(_, d)| d.date.as_deref())
    }

    pub fn time(&self) -> Option<&str> {
        self.session.as_ref().and_then(|(_, d)| d.time.as_deref())
    }

    pub fn table_id(&self) -> Option<i64> {
        self.session.as_ref().and_then(|(_, d)| d.table_id)
    }

    pub fn name(&self) -> &str {
        self.session.as_ref().map(|(_, d)| d.name.as_str()).unwrap_or("")
    }

    pub fn phone(&self) -> &str {
        self.session.as_ref().map(|(_, d)| d.phone.as_str()).unwrap_or("")
    }

    fn session_at(&mut self, step: WizardStep) -> Result<&mut WizardDraft, WizardError> {
        let (current, draft) = self.session.as_mut().ok_or(WizardError::NotOpen)?;
        if *current != step {
            return Err(WizardError::WrongStep);
        }
        Ok(draft)
    }

    // ── Step 1: schedule ────────────────────────────────────────────

    pub fn select_date(&mut self, label: &str) -> Result<(), WizardError> {
        if !ACTIVE_DATES.contains(&label) {
            return Err(WizardError::UnknownDate(label.to_string()));
        }
        let draft = self.session_at(WizardStep::SelectingSchedule)?;
        draft.date = Some(label.to_string());
        Ok(())
    }

    pub fn select_time(&mut self, slot: &str) -> Result<(), WizardError> {
        if !TIME_SLOTS.contains(&slot) {
            return Err(WizardError::UnknownTime(slot.to_string()));
        }
        let draft = self.session_at(WizardStep::SelectingSchedule)?;
        draft.time = Some(slot.to_string());
        Ok(())
    }

    // ── Step 2: table ───────────────────────────────────────────────

    /// Select a free table. Tapping a taken table is rejected here (the
    /// host shows an info card instead of a selection).
    pub fn select_table<S: StoragePort>(
        &mut self,
        table_id: i64,
        store: &BookingStore<S>,
        config: &BusinessConfig,
    ) -> Result<(), WizardError> {
        // The step invariant guarantees the schedule is set here
        let draft = self.session_at(WizardStep::SelectingTable)?;
        let (date, time) = match (&draft.date, &draft.time) {
            (Some(d), Some(t)) => (d.clone(), t.clone()),
            _ => return Err(WizardError::IncompleteSchedule),
        };

        if !config.hall.contains(table_id) {
            return Err(WizardError::UnknownTable(table_id));
        }
        if store.is_table_taken(table_id, &date, &time) {
            return Err(WizardError::TableTaken(table_id));
        }

        draft.table_id = Some(table_id);
        Ok(())
    }

    // ── Step 3: contact ─────────────────────────────────────────────

    pub fn set_name(&mut self, name: &str) -> Result<(), WizardError> {
        let draft = self.session_at(WizardStep::EnteringContact)?;
        draft.name = name.to_string();
        Ok(())
    }

    /// Feed raw phone input through the progressive mask.
    pub fn set_phone(&mut self, raw: &str) -> Result<(), WizardError> {
        let draft = self.session_at(WizardStep::EnteringContact)?;
        draft.phone = format_phone_input(raw, draft.phone.len());
        Ok(())
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Whether the forward affordance is enabled on the current step.
    pub fn can_advance<S: StoragePort>(&self, store: &BookingStore<S>) -> bool {
        match self.session.as_ref() {
            None => false,
            Some((WizardStep::SelectingSchedule, d)) => d.date.is_some() && d.time.is_some(),
            Some((WizardStep::SelectingTable, d)) => match (d.table_id, &d.date, &d.time) {
                (Some(id), Some(date), Some(time)) => !store.is_table_taken(id, date, time),
                _ => false,
            },
            Some((WizardStep::EnteringContact, d)) => {
                !d.name.trim().is_empty() && !d.phone.trim().is_empty()
            }
        }
    }

    /// Guarded forward transition. The table-step guard re-checks
    /// availability, so a selection stale after back-navigation is
    /// caught here.
    pub fn advance<S: StoragePort>(
        &mut self,
        store: &BookingStore<S>,
    ) -> Result<WizardStep, WizardError> {
        let (step, draft) = self.session.as_mut().ok_or(WizardError::NotOpen)?;
        match step {
            WizardStep::SelectingSchedule => {
                if draft.date.is_none() || draft.time.is_none() {
                    return Err(WizardError::IncompleteSchedule);
                }
                *step = WizardStep::SelectingTable;
            }
            WizardStep::SelectingTable => {
                let table_id = draft.table_id.ok_or(WizardError::NoTableSelected)?;
                // Schedule is always set once this step is reachable
                let date = draft.date.as_deref().ok_or(WizardError::IncompleteSchedule)?;
                let time = draft.time.as_deref().ok_or(WizardError::IncompleteSchedule)?;
                if store.is_table_taken(table_id, date, time) {
                    return Err(WizardError::TableTaken(table_id));
                }
                *step = WizardStep::EnteringContact;
            }
            WizardStep::EnteringContact => return Err(WizardError::WrongStep),
        }
        Ok(*step)
    }

    /// Backward transition: always permitted, keeps entered data.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let (step, _) = self.session.as_mut().ok_or(WizardError::NotOpen)?;
        *step = match step {
            WizardStep::SelectingSchedule => WizardStep::SelectingSchedule,
            WizardStep::SelectingTable => WizardStep::SelectingSchedule,
            WizardStep::EnteringContact => WizardStep::SelectingTable,
        };
        Ok(*step)
    }

    /// Whether the confirm affordance is enabled.
    pub fn can_confirm(&self) -> bool {
        matches!(
            self.session.as_ref(),
            Some((WizardStep::EnteringContact, d))
                if !d.name.trim().is_empty() && !d.phone.trim().is_empty()
        )
    }

    /// Commit the booking: create the reservation, build the handoff
    /// link with the cart summary, clear the cart, close the wizard.
    ///
    /// The record is committed locally whether or not the host actually
    /// opens the returned URL.
    pub fn confirm<S1, S2>(
        &mut self,
        store: &mut BookingStore<S1>,
        cart: &mut Cart<S2>,
        config: &BusinessConfig,
    ) -> Result<BookingConfirmation, WizardError>
    where
        S1: StoragePort,
        S2: StoragePort,
    {
        let (step, draft) = self.session.as_ref().ok_or(WizardError::NotOpen)?;
        if *step != WizardStep::EnteringContact {
            return Err(WizardError::WrongStep);
        }
        if draft.name.trim().is_empty() || draft.phone.trim().is_empty() {
            return Err(WizardError::MissingContact);
        }

        let table_id = draft.table_id.ok_or(WizardError::NoTableSelected)?;
        let (date, time) = match (&draft.date, &draft.time) {
            (Some(d), Some(t)) => (d.clone(), t.clone()),
            _ => return Err(WizardError::IncompleteSchedule),
        };

        let items = cart.items();
        let total = cart.total();

        let reservation = store.create(ReservationDraft {
            table_id,
            date,
            time,
            name: draft.name.trim().to_string(),
            phone: draft.phone.trim().to_string(),
        });

        let text = render_booking_message(
            &config.store,
            config.hall.table(table_id),
            &reservation,
            &items,
            total,
        );
        let url = handoff_url(&config.store.telegram_admin, &text);

        cart.clear();
        self.close();

        tracing::info!(id = %reservation.id, table_id, "Booking confirmed");

        Ok(BookingConfirmation {
            event: AppEvent::booking_confirmed(&reservation),
            toast: ToastEvent::success("Заявка сформирована! Переход в Telegram..."),
            reservation,
            handoff_url: url,
        })
    }
}
