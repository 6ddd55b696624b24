//! Stock level queries.

use relay_netsuite::RecordSource;
use tracing::debug;

use crate::error::CatalogError;
use crate::payload::StockMessage;

/// Quantity available for one item, looked up by item id.
///
/// An unknown item yields no message rather than an error; the downstream
/// endpoint treats the empty answer as "nothing to report".
pub fn stock_level<S: RecordSource>(
    source: &S,
    sku: &str,
) -> Result<Option<StockMessage>, CatalogError> {
    let Some(record) = source.find_by_item_id(sku)? else {
        debug!(sku, "no inventory record for stock query");
        return Ok(None);
    };

    Ok(Some(StockMessage {
        sku: record.item_id,
        quantity: record.quantity_available.unwrap_or(0.0),
    }))
}
