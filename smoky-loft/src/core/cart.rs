//! Cart
//!
//! The order the guest assembles from the service catalog. Persisted
//! under its own storage key with the same soft-fail reads and
//! write-through saves as the booking store. The booking core reads it
//! for the handoff summary and clears it on a confirmed booking.

use shared::models::CartItem;

use super::storage::StoragePort;

/// Storage key of the cart collection.
pub const CART_KEY: &str = "cart";

/// Persisted shopping cart.
pub struct Cart<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> Cart<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn load(&self) -> Vec<CartItem> {
        match self.storage.get(CART_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Corrupt cart document, treating as empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::debug!(error = %e, "Cart storage unavailable, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, items: &[CartItem]) {
        let raw = match serde_json::to_string(items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode cart");
                return;
            }
        };
        if let Err(e) = self.storage.set(CART_KEY, &raw) {
            tracing::warn!(error = %e, "Failed to persist cart");
        }
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.load()
    }

    /// Append a line. Duplicates are allowed: two Classic hookahs are
    /// two lines.
    pub fn add(&mut self, item: CartItem) {
        let mut items = self.load();
        items.push(item);
        self.save(&items);
    }

    /// Sum of line prices in whole rubles.
    pub fn total(&self) -> i64 {
        self.load().iter().map(|i| i.price).sum()
    }

    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(CART_KEY) {
            tracing::warn!(error = %e, "Failed to clear cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;

    fn item(id: i64, title: &str, price: i64) -> CartItem {
        CartItem {
            id,
            title: title.to_string(),
            price,
        }
    }

    #[test]
    fn test_add_and_total() {
        let mut cart = Cart::new(MemoryStorage::new());
        assert!(cart.is_empty());

        cart.add(item(1, "Кальян Classic", 1200));
        cart.add(item(2, "Авторский Микс", 1700));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 2900);
    }

    #[test]
    fn test_duplicates_are_separate_lines() {
        let mut cart = Cart::new(MemoryStorage::new());
        cart.add(item(1, "Кальян Classic", 1200));
        cart.add(item(1, "Кальян Classic", 1200));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 2400);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new(MemoryStorage::new());
        cart.add(item(1, "Кальян Classic", 1200));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_corrupt_storage_degrades_to_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(CART_KEY, "oops").unwrap();

        let cart = Cart::new(storage);
        assert!(cart.items().is_empty());
    }
}
