//! Business configuration
//!
//! Venue info, service catalog and hall layout. The built-in default
//! carries the Smoky Loft data; a JSON file can override it. A missing
//! or unreadable file falls back to the default - configuration faults
//! never take the app down.

use std::path::Path;

use serde::{Deserialize, Serialize};

use shared::models::{
    HallLayout, HallTable, HeroBlock, LoyaltyProgram, Service, StoreInfo, TableType,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessConfig {
    pub store: StoreInfo,
    pub services: Vec<Service>,
    pub hall: HallLayout,
}

impl BusinessConfig {
    /// Read a config override from a JSON file, falling back to the
    /// built-in default when the file is absent or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Bad config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            store: StoreInfo {
                name: "Smoky Loft".to_string(),
                telegram_admin: "vyacheslav_admin".to_string(),
                currency: "₽".to_string(),
                hero: HeroBlock {
                    title: "Атмосфера правильного отдыха".to_string(),
                    subtitle: "Авторские миксы, чайная карта и PS5. Бронируй стол.".to_string(),
                    emoji: "💨".to_string(),
                },
                loyalty: LoyaltyProgram {
                    title: "Smoky Family".to_string(),
                    discount: "Free".to_string(),
                    description: "Замена чаши бесплатно при заказе от 3000₽.".to_string(),
                },
            },
            services: vec![
                Service {
                    id: 1,
                    title: "Кальян Classic".to_string(),
                    price: 1200,
                    description: "Легкие и средние табаки на классической чаше.".to_string(),
                    image: "https://images.unsplash.com/photo-1527661591475-527312dd65f5?auto=format&fit=crop&q=80&w=800".to_string(),
                },
                Service {
                    id: 2,
                    title: "Авторский Микс".to_string(),
                    price: 1700,
                    description: "Фруктовая чаша (грейпфрут/ананас), премиум табаки.".to_string(),
                    image: "https://images.unsplash.com/photo-1512418490979-92798cec1380?auto=format&fit=crop&q=80&w=800".to_string(),
                },
                Service {
                    id: 3,
                    title: "VIP Комната + PS5".to_string(),
                    price: 500,
                    description: "Отдельная комната, большой экран, приставка. Цена за час.".to_string(),
                    image: "https://images.unsplash.com/photo-1605901309584-818e25960b8f?auto=format&fit=crop&q=80&w=800".to_string(),
                },
            ],
            hall: HallLayout {
                tables: vec![
                    table(1, "Стол 1", TableType::Sofa, 4, 22.0, 18.0, 2000),
                    table(2, "Стол 2", TableType::Sofa, 4, 50.0, 18.0, 2000),
                    table(3, "Стол 3", TableType::Window, 2, 78.0, 22.0, 1500),
                    table(4, "Стол 4", TableType::Window, 2, 20.0, 45.0, 1500),
                    table(5, "Стол 5", TableType::Sofa, 6, 48.0, 48.0, 2500),
                    table(6, "Бар 1", TableType::Bar, 2, 88.0, 40.0, 1000),
                    table(7, "VIP-7", TableType::Vip, 8, 30.0, 75.0, 5000),
                    table(8, "Бар 2", TableType::Bar, 2, 88.0, 62.0, 1000),
                    table(9, "Стол 9", TableType::Window, 3, 65.0, 78.0, 1500),
                ],
            },
        }
    }
}

fn table(
    id: i64,
    label: &str,
    table_type: TableType,
    seats: i32,
    x: f32,
    y: f32,
    min_order: i64,
) -> HallTable {
    HallTable {
        id,
        label: label.to_string(),
        table_type,
        seats,
        x,
        y,
        min_order,
    }
}
