//! Products command: run one mapping pass over a fixture.

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Utc};

use relay_catalog::reconcile::OrphanPolicy;
use relay_catalog::ProductFeed;
use relay_netsuite::memory::{Fixture, MemorySource};

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let source = load_source(args.fixture.as_deref(), ctx)?;

    let since = args
        .since
        .as_deref()
        .map(parse_since)
        .transpose()?;

    let policy = if args.strict {
        OrphanPolicy::Strict
    } else {
        ctx.config.mapping.orphan_policy
    };
    let channel = args
        .channel
        .clone()
        .unwrap_or_else(|| ctx.config.mapping.channel.clone());

    let mut feed = ProductFeed::poll(source, since)?
        .with_channel(channel)
        .with_orphan_policy(policy);

    let watermark = feed.last_modified();
    let messages = feed.messages()?;

    if ctx.output.is_json() {
        ctx.output.json(&messages);
        return Ok(());
    }

    ctx.output.header("Products");
    for message in messages {
        let product = &message.product;
        let variants = product
            .variants
            .as_ref()
            .map(|v| format!(" ({} variants)", v.len()))
            .unwrap_or_default();
        ctx.output.info(&format!(
            "{} [sku {}] price {}{}",
            product.name,
            product.sku,
            product.price.as_deref().unwrap_or("-"),
            variants
        ));
    }

    match watermark {
        Some(ts) => ctx.output.kv("watermark", &ts.to_rfc3339()),
        None => ctx.output.kv("watermark", "none (empty collection)"),
    }
    ctx.output
        .success(&format!("Mapped {} product message(s)", messages.len()));

    Ok(())
}

/// Build the in-memory source from the fixture path in args or config.
pub fn load_source(fixture_arg: Option<&str>, ctx: &Context) -> Result<MemorySource> {
    let Some(path) = fixture_arg.or(ctx.config.source.fixture.as_deref()) else {
        bail!("No fixture configured; pass --fixture or set source.fixture in relay.toml");
    };

    ctx.output.debug(&format!("loading fixture {}", path));
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file: {}", path))?;
    let fixture: Fixture = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fixture file: {}", path))?;

    Ok(MemorySource::from_fixture(fixture))
}

fn parse_since(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Invalid --since timestamp: {}", s))
}
