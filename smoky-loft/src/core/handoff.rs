//! External handoff
//!
//! The only "submission" mechanism: a confirmed booking is formatted
//! into a human-readable summary and wrapped in a Telegram deep link
//! the host opens in a new browsing context. No acknowledgment, no
//! retry — the local record is already committed when this runs.

use urlencoding::encode;

use shared::models::{CartItem, HallTable, Reservation, StoreInfo};

use crate::utils::price::format_price;

/// Multi-line booking summary (Telegram Markdown).
pub fn render_booking_message(
    store: &StoreInfo,
    table: Option<&HallTable>,
    reservation: &Reservation,
    items: &[CartItem],
    total: i64,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("🔥 *Новая бронь: {}*", store.name));
    lines.push(format!("👤 *Гость:* {}", reservation.name));
    lines.push(format!("📱 *Телефон:* {}", reservation.phone));
    match table {
        Some(t) => lines.push(format!(
            "🪑 *Стол:* {} ({})",
            t.label,
            t.table_type.label()
        )),
        None => lines.push(format!("🪑 *Стол:* #{}", reservation.table_id)),
    }
    lines.push(format!("📅 *Дата:* {}", reservation.date));
    lines.push(format!("⏰ *Время:* {}", reservation.time));

    lines.push(String::new());
    lines.push("🛒 *Заказ:*".to_string());
    for item in items {
        lines.push(format!(
            "- {} ({})",
            item.title,
            format_price(item.price, &store.currency)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "💰 *Итого:* {}",
        format_price(total, &store.currency)
    ));

    lines.join("\n")
}

/// Deep link carrying the pre-filled summary text.
pub fn handoff_url(telegram_admin: &str, text: &str) -> String {
    format!("https://t.me/{}?text={}", telegram_admin, encode(text))
}
