//! Base price resolution.

use relay_netsuite::pricing::PricingMatrix;

/// Resolve the single base price of a pricing matrix.
///
/// Only the first entry counts; other currencies and price levels are
/// ignored. Within it, the base tier is the single price or the first
/// tier in list order. An empty matrix or an entry without a price list
/// resolves to `None`; price absence is a valid business state, not an
/// error, and callers fall back accordingly.
pub fn base_price(matrix: &PricingMatrix) -> Option<String> {
    let entry = matrix.prices.first()?;
    let tier = entry.price_list.as_ref()?.base_tier()?;
    Some(tier.value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_netsuite::pricing::{PriceEntry, PriceTier};

    #[test]
    fn test_single_tier_resolves_directly() {
        let matrix = PricingMatrix::of(PriceEntry::single("9.99"));
        assert_eq!(base_price(&matrix).as_deref(), Some("9.99"));
    }

    #[test]
    fn test_tiered_list_resolves_to_first_tier_not_cheapest() {
        let matrix = PricingMatrix::of(PriceEntry::tiered(vec![
            PriceTier::with_quantity("84.0", "10.0"),
            PriceTier::with_quantity("79.0", "100.0"),
        ]));
        assert_eq!(base_price(&matrix).as_deref(), Some("84.0"));
    }

    #[test]
    fn test_only_first_entry_is_considered() {
        let matrix = PricingMatrix {
            prices: vec![PriceEntry::single("9.99"), PriceEntry::single("8.49")],
        };
        assert_eq!(base_price(&matrix).as_deref(), Some("9.99"));
    }

    #[test]
    fn test_empty_matrix_yields_no_price() {
        assert_eq!(base_price(&PricingMatrix::default()), None);
    }

    #[test]
    fn test_entry_without_price_list_yields_no_price() {
        let matrix = PricingMatrix::of(PriceEntry::default());
        assert_eq!(base_price(&matrix), None);
    }

    #[test]
    fn test_empty_tier_list_yields_no_price() {
        let matrix = PricingMatrix::of(PriceEntry::tiered(Vec::new()));
        assert_eq!(base_price(&matrix), None);
    }
}
