//! Storefront CLI
//!
//! Thin wrapper around teeshop-core for quoting orders and previewing carts
//! from the terminal, using the same shop configuration as the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # List products and order options
//! teeshop catalog
//!
//! # Preview a cart (ids may repeat)
//! teeshop cart classic-tee classic-tee sport-tee
//!
//! # Price a custom order
//! teeshop quote --name Ana --model Clásica --size M --color Negro --quantity 2 \
//!     --extra nombre-numero --shipping "Envío estándar"
//!
//! # Show the WhatsApp link for a given hour
//! teeshop link --hour 20
//!
//! # Compute the background gradient for a pointer position
//! teeshop gradient 300 200 --width 1280 --height 800
//!
//! # Dump the effective configuration as JSON
//! teeshop config > shop.json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use teeshop_core::{
    paint, Cart, CartView, ContactLink, OrderCalculator, OrderForm, Point, ProductId, ShopConfig,
    Viewport,
};
use tracing::debug;

/// Playeras storefront tools
#[derive(Parser)]
#[command(name = "teeshop")]
#[command(version = "0.1.0")]
#[command(about = "Storefront tools - quote orders and preview carts")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Shop configuration file (JSON); built-in defaults when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products and custom order options
    Catalog,

    /// Add catalog products to a cart and print it
    Cart {
        /// Product ids, one add per occurrence
        ids: Vec<String>,

        /// Decrease a product's quantity by one after adding (repeatable)
        #[arg(long = "minus")]
        minus: Vec<String>,

        /// Remove a product entirely after adding (repeatable)
        #[arg(long)]
        remove: Vec<String>,
    },

    /// Price a custom order
    Quote {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Model name, as listed by `catalog`
        #[arg(long)]
        model: String,

        #[arg(long)]
        size: String,

        #[arg(long)]
        color: String,

        #[arg(short, long, default_value = "1")]
        quantity: String,

        /// Extra id (repeatable)
        #[arg(long = "extra")]
        extras: Vec<String>,

        /// Name printed on the jersey
        #[arg(long)]
        jersey_name: Option<String>,

        /// Number printed on the jersey
        #[arg(long)]
        jersey_number: Option<String>,

        /// Shipping option label
        #[arg(long)]
        shipping: Option<String>,

        /// Free-form instructions
        #[arg(long)]
        instructions: Option<String>,
    },

    /// Show the floating WhatsApp link
    Link {
        /// Local hour (0-23); the current hour when omitted
        #[arg(long)]
        hour: Option<u32>,
    },

    /// Compute the background gradient for a pointer position
    Gradient {
        x: f64,
        y: f64,

        #[arg(long, default_value = "1280")]
        width: f64,

        #[arg(long, default_value = "800")]
        height: f64,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ShopConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ShopConfig::default(),
    };

    match cli.command {
        Commands::Catalog => print_catalog(&config),

        Commands::Cart { ids, minus, remove } => {
            let mut cart = Cart::new();
            for id in &ids {
                let tag = config
                    .catalog
                    .iter()
                    .find(|t| t.id.as_deref() == Some(id.as_str()))
                    .with_context(|| format!("Unknown product: {}", id))?;
                if !cart.add_tagged(tag) {
                    bail!("Product {} has an invalid catalog entry", id);
                }
            }
            for id in &minus {
                cart.change_quantity(&ProductId::from(id.as_str()), -1);
            }
            for id in &remove {
                cart.remove_item(&ProductId::from(id.as_str()));
            }

            print!("{}", CartView::project(&cart));
        }

        Commands::Quote {
            name,
            model,
            size,
            color,
            quantity,
            extras,
            jersey_name,
            jersey_number,
            shipping,
            instructions,
        } => {
            let options = &config.order;
            let model = match options.model(&model) {
                Some(m) => m.clone(),
                None => bail!(
                    "Unknown model: {} (available: {})",
                    model,
                    options.models.iter().map(|m| m.name.as_str()).collect::<Vec<_>>().join(", ")
                ),
            };
            let extras = extras
                .iter()
                .map(|id| options.extra(id).cloned().with_context(|| format!("Unknown extra: {}", id)))
                .collect::<Result<Vec<_>>>()?;
            let shipping = match shipping {
                Some(label) => Some(
                    options
                        .shipping_option(&label)
                        .cloned()
                        .with_context(|| format!("Unknown shipping option: {}", label))?,
                ),
                None => None,
            };

            let form = OrderForm {
                customer_name: name,
                model: Some(model),
                size,
                color,
                quantity: teeshop_core::parse_quantity(&quantity),
                extras,
                jersey_name: jersey_name.unwrap_or_default(),
                jersey_number: jersey_number.unwrap_or_default(),
                shipping,
                instructions: instructions.unwrap_or_default(),
            };
            debug!(?form, "Quoting order");

            let mut calculator = OrderCalculator::new();
            let summary = calculator.submit(&form)?;
            print!("{}", summary);
        }

        Commands::Link { hour } => {
            let link = match hour {
                Some(h) if h > 23 => bail!("Hour must be between 0 and 23, got {}", h),
                Some(h) => ContactLink::for_hour(&config.contact, h),
                None => ContactLink::now(&config.contact),
            };
            println!("{}", link.title);
            println!("{}", link.href);
        }

        Commands::Gradient { x, y, width, height } => {
            let gradient = paint(Point::new(x, y), Viewport::new(width, height));
            println!("{}", gradient);
        }

        Commands::Config => {
            println!("{}", config.to_json_pretty()?);
        }
    }

    Ok(())
}

fn print_catalog(config: &ShopConfig) {
    println!("{}", config.shop_name);
    println!();
    println!("Products:");
    for tag in &config.catalog {
        match tag.to_product() {
            Ok(product) => println!("  {:<16} {:<24} {}", product.id.as_str(), product.name, product.unit_price),
            Err(e) => println!("  (invalid entry: {})", e),
        }
    }

    let order = &config.order;
    println!();
    println!("Models:");
    for model in &order.models {
        println!("  {:<16} {}", model.name, model.unit_price);
    }
    println!();
    println!("Sizes:  {}", order.sizes.join(", "));
    println!("Colors: {}", order.colors.join(", "));
    println!();
    println!("Extras:");
    for extra in &order.extras {
        println!("  {:<16} {:<24} {}", extra.id, extra.label, extra.unit_price);
    }
    println!();
    println!("Shipping:");
    for option in &order.shipping {
        println!("  {:<24} {}", option.label, option.cost);
    }
}

/// Setup logging based on verbosity level
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
        .with_writer(std::io::stderr)
        .init();
}
