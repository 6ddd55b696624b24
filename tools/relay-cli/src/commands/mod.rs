//! CLI command implementations.

pub mod products;
pub mod stock;

use clap::Args;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Fixture file backing the record source (overrides config).
    #[arg(short, long)]
    pub fixture: Option<String>,

    /// Only map records modified after this RFC 3339 timestamp.
    #[arg(short, long)]
    pub since: Option<String>,

    /// Fail the run on matrix children with a missing parent.
    #[arg(long)]
    pub strict: bool,

    /// Channel tag to stamp on payloads (overrides config).
    #[arg(long)]
    pub channel: Option<String>,
}

/// Arguments for the stock command.
#[derive(Args)]
pub struct StockArgs {
    /// Fixture file backing the record source (overrides config).
    #[arg(short, long)]
    pub fixture: Option<String>,

    /// Item id to query.
    #[arg(short, long)]
    pub sku: String,
}
