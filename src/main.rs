#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use teeshop_core::ShopConfig;

/// Global shop configuration, loaded once from the command line
static SHOP_CONFIG: OnceLock<ShopConfig> = OnceLock::new();

/// Get the shop configuration (loaded at startup or built-in defaults)
pub fn get_shop_config() -> ShopConfig {
    SHOP_CONFIG.get().cloned().unwrap_or_default()
}

/// Default config location (~/.config/teeshop/shop.json on Linux)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("teeshop").join("shop.json"))
}

/// Playeras storefront - desktop shop page
#[derive(Parser, Debug)]
#[command(name = "teeshop-desktop")]
#[command(about = "Playeras storefront - cart, custom orders and WhatsApp contact")]
struct Args {
    /// Shop configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// WhatsApp number override (country code + number)
    #[arg(short, long)]
    phone: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    // An explicit --config is always tried; the default path only when present
    let config_path = args
        .config
        .clone()
        .or_else(|| default_config_path().filter(|p| p.exists()));
    let mut shop = ShopConfig::load_or_default(config_path.as_deref());

    if let Some(phone) = args.phone {
        if phone.chars().any(|c| c.is_ascii_digit()) {
            shop.contact.phone = phone;
        } else {
            tracing::warn!("Ignoring --phone without digits: {:?}", phone);
        }
    }

    let title = shop.shop_name.clone();
    tracing::info!(
        "Starting '{}' with config: {:?}",
        title,
        config_path.as_deref().unwrap_or_else(|| std::path::Path::new("(defaults)"))
    );

    // Store config globally
    let _ = SHOP_CONFIG.set(shop);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
