//! Cart Model

use serde::{Deserialize, Serialize};

/// Cart line (a service added to the order)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub title: String,
    /// Price in whole rubles
    pub price: i64,
}
