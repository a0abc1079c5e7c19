//! Brunelli CLI - catalog queries and cart quotes.
//!
//! # Usage
//!
//! ```bash
//! # List the shop, cheapest first, black items only
//! brunelli catalog list --color Black --sort price-low
//!
//! # Product page with related products
//! brunelli catalog show 1
//!
//! # Category tree
//! brunelli catalog categories
//!
//! # Quote a cart (ID:SIZE[:COLOR[:QTY]])
//! brunelli quote --item 2:34B:Nude:2 --item "4:One Size"
//! ```
//!
//! Every command reads the catalog from `--catalog`, else
//! `STOREFRONT_CATALOG_PATH`, else the built-in demo catalog.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use brunelli_core::catalog::SortKey;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

use commands::catalog::ListOptions;
use commands::quote::ItemSpec;

#[derive(Parser)]
#[command(name = "brunelli")]
#[command(author, version, about = "Brunelli storefront CLI tools")]
struct Cli {
    /// Catalog JSON file (defaults to the demo catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Quote a cart: line totals, shipping and grand total
    Quote {
        /// Cart line as ID:SIZE[:COLOR[:QTY]] (repeatable)
        #[arg(short, long = "item", required = true)]
        items: Vec<ItemSpec>,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Filtered, sorted product listing
    List {
        /// Category name (e.g. CLOTHING)
        #[arg(long)]
        category: Option<String>,

        /// Subcategory name (case-insensitive)
        #[arg(long)]
        subcategory: Option<String>,

        /// Keep products offering this color (repeatable)
        #[arg(long = "color")]
        colors: Vec<String>,

        /// Keep products offering this size (repeatable)
        #[arg(long = "size")]
        sizes: Vec<String>,

        /// Inclusive price ceiling (default 500)
        #[arg(long)]
        max_price: Option<Decimal>,

        /// featured, newest, bestseller, price-low or price-high
        #[arg(long, default_value = "featured")]
        sort: SortKey,
    },
    /// Show one product with related products
    Show {
        /// Product id
        id: String,
    },
    /// Print the category tree
    Categories,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = commands::load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                subcategory,
                colors,
                sizes,
                max_price,
                sort,
            } => {
                let options = ListOptions {
                    category,
                    subcategory,
                    colors,
                    sizes,
                    max_price,
                    sort,
                };
                commands::catalog::list(&catalog, &options);
            }
            CatalogAction::Show { id } => commands::catalog::show(&catalog, &id)?,
            CatalogAction::Categories => commands::catalog::categories(&catalog),
        },
        Commands::Quote { items } => commands::quote::run(&catalog, &items)?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_list() {
        let cli = Cli::try_parse_from([
            "brunelli",
            "catalog",
            "list",
            "--category",
            "CLOTHING",
            "--color",
            "Black",
            "--color",
            "Navy",
            "--max-price",
            "150",
            "--sort",
            "price-high",
        ])
        .unwrap();

        let Commands::Catalog {
            action:
                CatalogAction::List {
                    category,
                    colors,
                    max_price,
                    sort,
                    ..
                },
        } = cli.command
        else {
            panic!("expected catalog list");
        };
        assert_eq!(category.as_deref(), Some("CLOTHING"));
        assert_eq!(colors, ["Black", "Navy"]);
        assert_eq!(max_price, Some(Decimal::from(150)));
        assert_eq!(sort, SortKey::PriceHigh);
    }

    #[test]
    fn test_parse_rejects_unknown_sort() {
        let result = Cli::try_parse_from(["brunelli", "catalog", "list", "--sort", "cheapest"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_quote_with_global_catalog() {
        let cli = Cli::try_parse_from([
            "brunelli",
            "quote",
            "--item",
            "2:34B:Nude:2",
            "-i",
            "4:One Size",
            "--catalog",
            "catalog.json",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("catalog.json")));
        let Commands::Quote { items } = cli.command else {
            panic!("expected quote");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity.get(), 2);
    }

    #[test]
    fn test_quote_requires_items() {
        assert!(Cli::try_parse_from(["brunelli", "quote"]).is_err());
    }
}
