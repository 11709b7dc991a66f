//! # Offer Module
//!
//! Multi-buy discount offers and the book that associates them with
//! products.
//!
//! An offer is a pure pricing strategy: given a unit price and how many
//! units of the same product have already been priced, it returns the charge
//! for the current unit. Offers are keyed directly by product code in an
//! ordered book; when two entries name the same code, the earliest wins, so
//! evaluation is deterministic.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductCode;
use crate::money::Money;

// =============================================================================
// Offer
// =============================================================================

/// A multi-buy discount strategy for one product.
///
/// All variants discount every *second* unit: with a prior count of 0 the
/// unit is full price, at 1 it is discounted, at 2 full price again, and so
/// on. "Buy one, get the second half price" is the canonical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Offer {
    /// Every second unit is half price.
    SecondUnitHalfPrice,

    /// Every second unit is discounted by the given basis points
    /// (1000 = 10% off).
    SecondUnitPercentOff { bps: u32 },
}

impl Offer {
    /// Charge for one unit, given how many units of the same product were
    /// already priced in this basket.
    pub fn unit_charge(&self, unit_price: Money, prior_units: u64) -> Money {
        // The discount lands on every second unit: odd prior count.
        if prior_units % 2 == 0 {
            return unit_price;
        }
        match self {
            Offer::SecondUnitHalfPrice => unit_price.halved(),
            Offer::SecondUnitPercentOff { bps } => unit_price.percent_off(*bps),
        }
    }
}

// =============================================================================
// Offer Book
// =============================================================================

/// The offers in force, keyed by product code.
///
/// An ordered list rather than a map: at most one offer applies per product,
/// and the first entry for a code wins, which keeps duplicate entries
/// deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferBook {
    offers: Vec<(ProductCode, Offer)>,
}

impl OfferBook {
    /// Creates an offer book from `(code, offer)` pairs in priority order.
    pub fn new(offers: Vec<(ProductCode, Offer)>) -> Self {
        OfferBook { offers }
    }

    /// A book with no offers in force.
    pub fn none() -> Self {
        OfferBook { offers: Vec::new() }
    }

    /// The offer in force for a product, if any (first match wins).
    pub fn for_product(&self, code: &ProductCode) -> Option<&Offer> {
        self.offers
            .iter()
            .find(|(offer_code, _)| offer_code == code)
            .map(|(_, offer)| offer)
    }

    /// Number of offer entries.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Whether the book has no offers.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_price_applies_to_every_second_unit() {
        let offer = Offer::SecondUnitHalfPrice;
        let price = Money::from_major_minor(32, 95);

        assert_eq!(offer.unit_charge(price, 0), price);
        assert_eq!(offer.unit_charge(price, 1).amount(), dec!(16.475));
        assert_eq!(offer.unit_charge(price, 2), price);
        assert_eq!(offer.unit_charge(price, 3).amount(), dec!(16.475));
    }

    #[test]
    fn test_percent_off_variant() {
        let offer = Offer::SecondUnitPercentOff { bps: 2000 };
        let price = Money::from_major_minor(10, 0);

        assert_eq!(offer.unit_charge(price, 0), price);
        assert_eq!(offer.unit_charge(price, 1).amount(), dec!(8.00));
        // 5000 bps matches the half-price variant exactly
        let half = Offer::SecondUnitPercentOff { bps: 5000 };
        assert_eq!(
            half.unit_charge(price, 1),
            Offer::SecondUnitHalfPrice.unit_charge(price, 1)
        );
    }

    #[test]
    fn test_first_entry_wins_for_duplicate_codes() {
        let book = OfferBook::new(vec![
            (ProductCode::from("R01"), Offer::SecondUnitHalfPrice),
            (
                ProductCode::from("R01"),
                Offer::SecondUnitPercentOff { bps: 1000 },
            ),
        ]);
        assert_eq!(
            book.for_product(&ProductCode::from("R01")),
            Some(&Offer::SecondUnitHalfPrice)
        );
    }

    #[test]
    fn test_no_offer_for_unlisted_product() {
        let book = OfferBook::new(vec![(ProductCode::from("R01"), Offer::SecondUnitHalfPrice)]);
        assert_eq!(book.for_product(&ProductCode::from("B01")), None);
        assert!(OfferBook::none().is_empty());
    }
}
