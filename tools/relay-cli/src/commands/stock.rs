//! Stock command: quantity-available query against a fixture.

use anyhow::Result;

use relay_catalog::stock::stock_level;

use super::StockArgs;
use crate::commands::products::load_source;
use crate::context::Context;

/// Run the stock command.
pub fn run(args: StockArgs, ctx: &Context) -> Result<()> {
    let source = load_source(args.fixture.as_deref(), ctx)?;

    match stock_level(&source, &args.sku)? {
        Some(message) => {
            if ctx.output.is_json() {
                ctx.output.json(&message);
                return Ok(());
            }
            ctx.output.header("Stock");
            ctx.output.kv("sku", &message.sku);
            ctx.output.kv("quantity", &message.quantity.to_string());
        }
        None => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({}));
                return Ok(());
            }
            ctx.output
                .info(&format!("No inventory record for '{}'", args.sku));
        }
    }

    Ok(())
}
