//! Bookinest CLI - inspect and edit the persisted cart.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart as a table
//! bookinest cart show
//!
//! # Add one copy of a book
//! bookinest cart add --id B1 --name "Atlas" --price 1000 --variant "Libro Físico"
//!
//! # Change a line's quantity (negative deltas remove copies)
//! bookinest cart qty --id B1 --variant "Libro Físico" --delta -1
//!
//! # Remove a line, or empty the cart
//! bookinest cart remove --id B1 --variant "Libro Físico"
//! bookinest cart clear
//! ```
//!
//! The CLI reads the same configuration as the storefront
//! (`BOOKINEST_DATA_DIR`, `BOOKINEST_CART_KEY`), so both operate on one
//! slot file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use bookinest_core::{Price, Variant};
use bookinest_storefront::cart::{CartStore, TracingObserver};
use bookinest_storefront::config::StorefrontConfig;
use bookinest_storefront::storage::FileSlotStore;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bookinest")]
#[command(author, version, about = "Bookinest CLI tools")]
struct Cli {
    /// Directory holding slot files (overrides `BOOKINEST_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Slot key of the cart (overrides `BOOKINEST_CART_KEY`)
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or edit the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart with line subtotals and totals
    Show,
    /// Print the number of copies in the cart
    Count,
    /// Add one copy of a product
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Unit price in whole pesos
        #[arg(short, long, allow_hyphen_values = true)]
        price: Price,

        /// Image URL
        #[arg(long, default_value = "")]
        image: String,

        /// Variant label
        #[arg(short, long, default_value = Variant::PHYSICAL_BOOK)]
        variant: String,
    },
    /// Remove a line
    Remove {
        /// Product id
        #[arg(long)]
        id: String,

        /// Variant label
        #[arg(short, long, default_value = Variant::PHYSICAL_BOOK)]
        variant: String,
    },
    /// Change a line's quantity by a signed delta
    Qty {
        /// Product id
        #[arg(long)]
        id: String,

        /// Variant label
        #[arg(short, long, default_value = Variant::PHYSICAL_BOOK)]
        variant: String,

        /// Amount to add (negative to subtract)
        #[arg(short, long, allow_hyphen_values = true)]
        delta: i64,
    },
    /// Remove every line
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }
    if let Some(key) = cli.key {
        config = config.with_cart_key(key)?;
    }

    let slots = Arc::new(FileSlotStore::new(&config.storage.data_dir));
    let mut store = CartStore::open(slots, &config.storage.cart_key)
        .with_notification_duration(config.ui.notification_duration);
    store.subscribe(Arc::new(TracingObserver));

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&store, &mut out)?,
            CartAction::Count => commands::cart::count(&store, &mut out)?,
            CartAction::Add {
                id,
                name,
                price,
                image,
                variant,
            } => commands::cart::add(&mut store, &mut out, id, name, price, image, variant)?,
            CartAction::Remove { id, variant } => {
                commands::cart::remove(&mut store, &mut out, id, variant)?;
            }
            CartAction::Qty { id, variant, delta } => {
                commands::cart::change_quantity(&mut store, &mut out, id, variant, delta)?;
            }
            CartAction::Clear => commands::cart::clear(&mut store, &mut out)?,
        },
    }
    Ok(())
}
