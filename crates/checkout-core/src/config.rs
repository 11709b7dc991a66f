//! # Pricing Configuration
//!
//! Bundles the three inputs a basket is priced against: catalog, delivery
//! schedule, and offer book. A configuration is assembled once (in code or
//! from JSON) and handed to [`Basket::new`](crate::Basket::new); the engine
//! never mutates it.
//!
//! The `Default` configuration is the reference widget store and is relied on
//! by the demo binary and the pinned pricing tests.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product, ProductCode};
use crate::delivery::{DeliveryRule, DeliverySchedule};
use crate::money::Money;
use crate::offer::{Offer, OfferBook};

/// Immutable pricing configuration for a basket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Products available for sale.
    pub catalog: Catalog,

    /// Delivery tiers, in evaluation order (descending minimums).
    pub delivery: DeliverySchedule,

    /// Multi-buy offers in force.
    pub offers: OfferBook,
}

impl Default for PricingConfig {
    /// The reference widget store:
    ///
    /// | Code | Product      | Price  |
    /// |------|--------------|--------|
    /// | R01  | Red Widget   | $32.95 |
    /// | G01  | Green Widget | $24.95 |
    /// | B01  | Blue Widget  | $7.95  |
    ///
    /// Delivery: free at $90+, $2.95 at $50+, $4.95 otherwise.
    /// Offers: second Red Widget half price.
    fn default() -> Self {
        PricingConfig {
            catalog: Catalog::new(vec![
                Product::new("R01", "Red Widget", Money::from_major_minor(32, 95)),
                Product::new("G01", "Green Widget", Money::from_major_minor(24, 95)),
                Product::new("B01", "Blue Widget", Money::from_major_minor(7, 95)),
            ]),
            delivery: DeliverySchedule::new(vec![
                DeliveryRule::new(Money::from_major_minor(90, 0), Money::zero()),
                DeliveryRule::new(
                    Money::from_major_minor(50, 0),
                    Money::from_major_minor(2, 95),
                ),
                DeliveryRule::new(Money::zero(), Money::from_major_minor(4, 95)),
            ]),
            offers: OfferBook::new(vec![(
                ProductCode::from("R01"),
                Offer::SecondUnitHalfPrice,
            )]),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::basket::Basket;

    #[test]
    fn test_default_configuration_values() {
        let config = PricingConfig::default();

        assert_eq!(config.catalog.len(), 3);
        let red = config.catalog.get(&ProductCode::from("R01")).unwrap();
        assert_eq!(red.name, "Red Widget");
        assert_eq!(red.price.amount(), dec!(32.95));

        assert_eq!(config.delivery.len(), 3);
        assert_eq!(
            config.delivery.cost_for(Money::zero()).unwrap().amount(),
            dec!(4.95)
        );

        assert_eq!(config.offers.len(), 1);
        assert_eq!(
            config.offers.for_product(&ProductCode::from("R01")),
            Some(&Offer::SecondUnitHalfPrice)
        );
        assert_eq!(config.offers.for_product(&ProductCode::from("G01")), None);
    }

    #[test]
    fn test_config_deserialized_from_json_prices_identically() {
        let config: PricingConfig = serde_json::from_value(json!({
            "catalog": {
                "products": [
                    { "code": "R01", "name": "Red Widget", "price": "32.95" },
                    { "code": "G01", "name": "Green Widget", "price": "24.95" },
                    { "code": "B01", "name": "Blue Widget", "price": "7.95" },
                ]
            },
            "delivery": {
                "rules": [
                    { "minimumSubtotal": "90", "cost": "0" },
                    { "minimumSubtotal": "50", "cost": "2.95" },
                    { "minimumSubtotal": "0", "cost": "4.95" },
                ]
            },
            "offers": {
                "offers": [["R01", "secondUnitHalfPrice"]]
            }
        }))
        .unwrap();

        let from_json = Basket::with_items("R01, R01", config).unwrap();
        let from_default = Basket::with_items("R01, R01", PricingConfig::default()).unwrap();
        assert_eq!(from_json.total().unwrap(), from_default.total().unwrap());
        assert_eq!(from_json.total().unwrap().amount(), dec!(54.38));
    }
}
