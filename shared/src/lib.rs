//! Shared types for the Smoky Loft booking app
//!
//! Data models used by the booking core and the frontend,
//! plus small ID/time/phone utilities.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
