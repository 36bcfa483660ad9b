//! Service Catalog Model

use serde::{Deserialize, Serialize};

use super::CartItem;

/// Catalog entry (кальян, авторский микс, VIP-комната...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    /// Price in whole rubles
    pub price: i64,
    pub description: String,
    /// Card image URL
    pub image: String,
}

impl Service {
    /// The cart line this service becomes when added to an order.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
        }
    }
}
