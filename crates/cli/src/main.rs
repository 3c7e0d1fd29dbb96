//! Kundan CLI - Catalog search, cart quotes and order tracking.
//!
//! # Usage
//!
//! ```bash
//! # List in-stock necklaces between ₹5,000 and ₹15,000
//! kundan products --category necklaces --min-price 5000 --max-price 15000 --in-stock
//!
//! # Search by text
//! kundan products -q diamond
//!
//! # Price a cart (product id:quantity)
//! kundan quote 1:1 3:2
//!
//! # Place a demo order and follow it to "shipped"
//! kundan track 1:1 3:2 --status shipped
//!
//! # Progress step for a raw status string
//! kundan status delivered
//! ```
//!
//! # Commands
//!
//! - `products` - List and filter the catalog
//! - `product` - Show one product
//! - `featured` - Trending products and new arrivals
//! - `categories` - List categories
//! - `quote` - Price breakdown for a cart
//! - `track` - Place a demo order and show its tracking timeline
//! - `status` - Map a status string to its progress step

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use kundan_core::{FilterCriteria, OrderStatus, PaymentMethod};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::orders::LineItem;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "kundan")]
#[command(author, version, about = "Kundan storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products, optionally filtered
    Products {
        /// Category id (e.g. `necklaces`)
        #[arg(short, long)]
        category: Option<String>,

        /// Minimum effective price
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum effective price
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Only products with stock
        #[arg(long)]
        in_stock: bool,

        /// Case-insensitive text to find in name, description or category
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a single product
    Product {
        /// Product id
        id: String,
    },
    /// List trending products and new arrivals
    Featured,
    /// List catalog categories
    Categories,
    /// Price breakdown for a cart
    Quote {
        /// Cart lines as `id:quantity` (quantity defaults to 1)
        #[arg(required = true, value_parser = commands::orders::parse_line_item)]
        items: Vec<LineItem>,
    },
    /// Place a demo order and show its tracking timeline
    Track {
        /// Cart lines as `id:quantity` (quantity defaults to 1)
        #[arg(required = true, value_parser = commands::orders::parse_line_item)]
        items: Vec<LineItem>,

        /// Status to move the order to after placing it
        #[arg(short, long, default_value = "pending")]
        status: OrderStatus,

        /// Payment method (`card`, `upi`, `cod`)
        #[arg(short, long, default_value = "card")]
        payment: PaymentMethod,
    },
    /// Map an order status string to its progress step
    Status {
        /// Raw status string
        status: String,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kundan=info,kundan_core=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;

    match cli.command {
        Commands::Products {
            category,
            min_price,
            max_price,
            in_stock,
            query,
        } => {
            let criteria = FilterCriteria {
                category: category.map(Into::into),
                min_price,
                max_price,
                in_stock,
                query,
            };
            let catalog = commands::open_catalog(&config).await?;
            commands::products::list(&catalog, &criteria).await?;
        }
        Commands::Product { id } => {
            let catalog = commands::open_catalog(&config).await?;
            commands::products::show(&catalog, &id.into()).await?;
        }
        Commands::Featured => {
            let catalog = commands::open_catalog(&config).await?;
            commands::products::featured(&catalog);
        }
        Commands::Categories => {
            let catalog = commands::open_catalog(&config).await?;
            commands::products::categories(&catalog);
        }
        Commands::Quote { items } => {
            let catalog = commands::open_catalog(&config).await?;
            commands::orders::quote(&catalog, &items).await?;
        }
        Commands::Track {
            items,
            status,
            payment,
        } => {
            let catalog = commands::open_catalog(&config).await?;
            let rng = commands::order_rng(&config);
            commands::orders::track(&catalog, rng, &items, status, payment).await?;
        }
        Commands::Status { status } => commands::orders::status(&status),
    }
    Ok(())
}
