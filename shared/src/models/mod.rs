//! Data models
//!
//! Shared between the booking core and the frontend.
//! Table IDs are `i64`; reservation IDs are time-based strings.

pub mod cart;
pub mod hall;
pub mod reservation;
pub mod service;
pub mod store_info;

// Re-exports
pub use cart::*;
pub use hall::*;
pub use reservation::*;
pub use service::*;
pub use store_info::*;
