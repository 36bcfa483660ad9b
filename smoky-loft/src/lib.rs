//! Smoky Loft - lounge booking core
//!
//! Headless core of the single-page promo/booking app: service catalog,
//! cart, multi-step table booking with an advisory availability model,
//! and local JSON persistence behind a storage port. There is no server:
//! a confirmed booking is committed to local storage and handed off as a
//! pre-filled Telegram deep link.

pub use shared;

pub mod config;
pub mod core;
pub mod events;
pub mod utils;

pub use config::BusinessConfig;
pub use core::booking_store::BookingStore;
pub use core::cart::Cart;
pub use core::storage::{JsonFileStorage, MemoryStorage, StoragePort};
pub use core::wizard::{BookingConfirmation, BookingWizard, WizardError, WizardStep};
