//! Store Info Model

use serde::{Deserialize, Serialize};

/// Venue information (singleton)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    /// Telegram username bookings are handed off to (without @)
    #[serde(rename = "telegramAdmin")]
    pub telegram_admin: String,
    /// Currency sign used in rendered prices
    pub currency: String,
    pub hero: HeroBlock,
    pub loyalty: LoyaltyProgram,
}

/// Landing hero block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroBlock {
    pub title: String,
    pub subtitle: String,
    pub emoji: String,
}

/// Loyalty program card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyProgram {
    pub title: String,
    pub discount: String,
    pub description: String,
}
