//! Smoky Loft demo runner
//!
//! Drives the booking core end to end against a local data directory:
//! seeds demo reservations, assembles a cart, walks the wizard through
//! a booking and prints the Telegram handoff link.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use smoky_loft_lib::core::hall_status::{hall_statuses, TableStatus};
use smoky_loft_lib::core::my_bookings::BookingsPanel;
use smoky_loft_lib::events::{AppEvent, ToastEvent};
use smoky_loft_lib::utils::price::format_price;
use smoky_loft_lib::{BookingStore, BookingWizard, BusinessConfig, Cart, JsonFileStorage};

#[derive(Parser)]
#[command(name = "smoky-loft", about = "Smoky Loft lounge booking demo")]
struct Args {
    /// Data directory for local JSON storage
    #[arg(long, env = "SMOKY_LOFT_DATA_DIR", default_value = ".smoky-loft")]
    data_dir: PathBuf,

    /// Business config override (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => BusinessConfig::load(path),
        None => BusinessConfig::default(),
    };

    let mut store = BookingStore::new(JsonFileStorage::new(&args.data_dir));
    let mut cart = Cart::new(JsonFileStorage::new(&args.data_dir));

    let seeded = store.seed_once();
    if seeded > 0 {
        tracing::info!(seeded, "Seeded demo reservations");
    }

    println!("=== {} ===", config.store.name);
    println!("{}\n", config.store.hero.subtitle);
    println!(
        "{}: {} ({})\n",
        config.store.loyalty.title, config.store.loyalty.discount, config.store.loyalty.description
    );

    println!("Меню & Услуги:");
    for service in &config.services {
        println!(
            "  [{}] {} - {}",
            service.id,
            service.title,
            format_price(service.price, &config.store.currency)
        );
    }

    // Assemble an order
    cart.clear();
    for service in &config.services[..2] {
        cart.add(service.to_cart_item());
        let toast = ToastEvent::success(format!("Добавлено: {}", service.title));
        println!("  > {}", toast.message);
    }
    let cart_event = AppEvent::CartUpdated {
        count: cart.len(),
        total: cart.total(),
    };
    tracing::debug!(event = %serde_json::to_string(&cart_event)?, "Cart updated");
    println!(
        "\nКорзина: {} поз. на {}",
        cart.len(),
        format_price(cart.total(), &config.store.currency)
    );

    // Walk the wizard
    let mut wizard = BookingWizard::new();
    wizard.open();
    wizard.select_date("Сегодня")?;
    wizard.select_time("18:00")?;
    wizard.advance(&store)?;

    println!("\nСхема зала (Сегодня 18:00):");
    let views = hall_statuses(&config, &store, "Сегодня", "18:00", None);
    for view in &views {
        let mark = match view.status {
            TableStatus::Free => "свободен",
            TableStatus::Selected => "выбран",
            TableStatus::Booked => "занят",
        };
        println!(
            "  {} ({} мест, от {}) - {}",
            view.table.label,
            view.table.seats,
            format_price(view.table.min_order, &config.store.currency),
            mark
        );
    }

    let free_table = views
        .iter()
        .find(|v| v.status == TableStatus::Free)
        .expect("hall is fully booked");
    wizard.select_table(free_table.table.id, &store, &config)?;
    wizard.advance(&store)?;

    wizard.set_name("Анна")?;
    wizard.set_phone("9990000000")?;
    let confirmation = wizard.confirm(&mut store, &mut cart, &config)?;

    println!(
        "\nБронь подтверждена: {} / {} {}",
        free_table.table.label, confirmation.reservation.date, confirmation.reservation.time
    );
    println!("Ссылка для отправки:\n{}\n", confirmation.handoff_url);

    let mut panel = BookingsPanel::new();
    panel.refresh(&store, &config);
    println!("Мои бронирования (активных: {}):", panel.entries().len());
    for entry in panel.entries() {
        let label = entry
            .table
            .as_ref()
            .map(|t| t.label.clone())
            .unwrap_or_else(|| format!("Стол #{}", entry.reservation.table_id));
        println!(
            "  {} - {} {} ({})",
            label, entry.reservation.date, entry.reservation.time, entry.reservation.name
        );
    }

    Ok(())
}
