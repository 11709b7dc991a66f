//! # Basket Module
//!
//! The shopping basket and its pricing algorithm.
//!
//! ## Pricing Flow
//! ```text
//! add(code) ──► items: [R01, R01, B01]
//!                      │
//!                      ▼
//! total(): per unit, in insertion order
//!     charge = offer(unit price, prior count)   (base price without offer)
//!     subtotal += charge, tally[code] += 1
//!                      │
//!                      ▼
//! delivery = first matching tier for subtotal
//!                      │
//!                      ▼
//! (subtotal + delivery) rounded to 2 dp, half-up
//! ```
//!
//! ## Thread Safety
//! A `Basket` is a plain single-caller value with no interior locking.
//! Callers that share one basket across threads must wrap it in their own
//! synchronization (the usual pattern is `Arc<Mutex<Basket>>` at the
//! application layer) or give each caller its own instance.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::catalog::ProductCode;
use crate::config::PricingConfig;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;

// =============================================================================
// Items Input
// =============================================================================

/// Bulk item input for [`Basket::with_items`]: either an ordered list of
/// codes or a single comma-separated string.
///
/// Typed callers convert with `From`; untyped callers (JSON) convert with
/// `TryFrom<serde_json::Value>`, which rejects any other shape with
/// [`CheckoutError::InvalidItemsType`].
#[derive(Debug, Clone)]
pub enum ItemsInput {
    /// An ordered list of product codes.
    Codes(Vec<ProductCode>),

    /// A comma-separated string of codes, e.g. `"R01, G01, B01"`.
    /// Whitespace around each code is trimmed; empty segments are skipped.
    Csv(String),
}

impl ItemsInput {
    /// Resolves the input to an ordered code list.
    fn into_codes(self) -> Vec<ProductCode> {
        match self {
            ItemsInput::Codes(codes) => codes,
            ItemsInput::Csv(csv) => csv
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(ProductCode::from)
                .collect(),
        }
    }
}

impl From<Vec<ProductCode>> for ItemsInput {
    fn from(codes: Vec<ProductCode>) -> Self {
        ItemsInput::Codes(codes)
    }
}

impl From<Vec<&str>> for ItemsInput {
    fn from(codes: Vec<&str>) -> Self {
        ItemsInput::Codes(codes.into_iter().map(ProductCode::from).collect())
    }
}

impl From<&str> for ItemsInput {
    fn from(csv: &str) -> Self {
        ItemsInput::Csv(csv.to_string())
    }
}

impl From<String> for ItemsInput {
    fn from(csv: String) -> Self {
        ItemsInput::Csv(csv)
    }
}

/// Describes a JSON value's shape for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

impl TryFrom<Value> for ItemsInput {
    type Error = CheckoutError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(csv) => Ok(ItemsInput::Csv(csv)),
            Value::Array(entries) => {
                let mut codes = Vec::with_capacity(entries.len());
                for entry in entries {
                    match entry {
                        Value::String(code) => codes.push(ProductCode::from(code)),
                        other => {
                            return Err(CheckoutError::InvalidItemsType {
                                found: format!("a list containing {}", json_kind(&other)),
                            })
                        }
                    }
                }
                Ok(ItemsInput::Codes(codes))
            }
            other => Err(CheckoutError::InvalidItemsType {
                found: json_kind(&other).to_string(),
            }),
        }
    }
}

// =============================================================================
// Basket
// =============================================================================

/// A shopping basket priced against an immutable configuration.
///
/// ## Lifecycle
/// Construct with a configuration, `add` codes, read `total()` as often as
/// needed — totalling is a pure read and never mutates the basket.
///
/// ## Invariants
/// - `items` is append-only; insertion order is preserved and duplicates are
///   allowed
/// - every code in `items` exists in the catalog (checked at `add` time)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    config: PricingConfig,
    items: Vec<ProductCode>,
    created_at: DateTime<Utc>,
}

impl Basket {
    /// Creates an empty basket priced against the given configuration.
    ///
    /// The configuration is taken as-is: catalogs, schedules and offer books
    /// are not validated here.
    pub fn new(config: PricingConfig) -> Self {
        Basket {
            config,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Constructs a basket and adds every item from the bulk input, in order.
    ///
    /// Propagates [`CheckoutError::UnknownProduct`] from the first invalid
    /// code unmodified.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Basket, PricingConfig};
    ///
    /// let basket = Basket::with_items("B01, G01", PricingConfig::default()).unwrap();
    /// assert_eq!(basket.total().unwrap().to_string(), "$37.85");
    /// ```
    pub fn with_items(
        items: impl Into<ItemsInput>,
        config: PricingConfig,
    ) -> CheckoutResult<Self> {
        let mut basket = Basket::new(config);
        for code in items.into().into_codes() {
            basket.add(code)?;
        }
        Ok(basket)
    }

    /// Adds one item to the basket.
    ///
    /// Fails with [`CheckoutError::UnknownProduct`] when the code is not in
    /// the catalog; the error enumerates the valid codes. On success returns
    /// the current item slice for chaining/inspection.
    pub fn add(&mut self, code: impl Into<ProductCode>) -> CheckoutResult<&[ProductCode]> {
        let code = code.into();
        if !self.config.catalog.contains(&code) {
            return Err(CheckoutError::UnknownProduct {
                code,
                known: self.config.catalog.codes(),
            });
        }
        self.items.push(code);
        Ok(&self.items)
    }

    /// Items added so far, in insertion order.
    pub fn items(&self) -> &[ProductCode] {
        &self.items
    }

    /// Number of items in the basket (units, not distinct products).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the basket holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the basket was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Prices the basket: per-unit charges with offers applied, plus the
    /// delivery tier for the subtotal, rounded to 2 decimal places half-up.
    ///
    /// Pure read — calling it repeatedly without an intervening `add` yields
    /// the identical value. Fails only on configuration errors
    /// ([`CheckoutError::NoDeliveryRule`]).
    pub fn total(&self) -> CheckoutResult<Money> {
        let mut subtotal = Money::zero();
        let mut tally: HashMap<&ProductCode, u64> = HashMap::new();

        for code in &self.items {
            let product = self
                .config
                .catalog
                .get(code)
                .ok_or_else(|| CheckoutError::UnknownProduct {
                    code: code.clone(),
                    known: self.config.catalog.codes(),
                })?;

            let prior_units = tally.get(code).copied().unwrap_or(0);
            let charge = match self.config.offers.for_product(code) {
                Some(offer) => offer.unit_charge(product.price, prior_units),
                None => product.price,
            };

            subtotal += charge;
            *tally.entry(code).or_insert(0) += 1;
        }

        // Delivery tiers compare against the exact subtotal; rounding is
        // applied once, to the final figure.
        let delivery = self.config.delivery.cost_for(subtotal)?;
        Ok((subtotal + delivery).rounded())
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

    use crate::catalog::{Catalog, Product};
    use crate::delivery::DeliverySchedule;

    fn default_basket(items: &str) -> Basket {
        Basket::with_items(items, PricingConfig::default()).unwrap()
    }

    // -------------------------------------------------------------------------
    // Pinned pricing scenarios (default configuration)
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_basket_charges_base_delivery() {
        assert_eq!(default_basket("").total().unwrap().amount(), dec!(4.95));
    }

    #[test]
    fn test_blue_and_green() {
        // 7.95 + 24.95 = 32.90, below 50 => 4.95 delivery
        assert_eq!(
            default_basket("B01, G01").total().unwrap().amount(),
            dec!(37.85)
        );
    }

    #[test]
    fn test_two_reds_second_half_price() {
        // 32.95 + 16.475 = 49.425, below 50 => +4.95 = 54.375 => 54.38
        assert_eq!(
            default_basket("R01, R01").total().unwrap().amount(),
            dec!(54.38)
        );
    }

    #[test]
    fn test_red_and_green_mid_tier_delivery() {
        // 57.90, at or above 50 => +2.95
        assert_eq!(
            default_basket("R01, G01").total().unwrap().amount(),
            dec!(60.85)
        );
    }

    #[test]
    fn test_three_reds_third_back_to_full_price() {
        // 15.90 + 32.95 + 16.475 + 32.95 = 98.275, >= 90 => free delivery
        // => 98.28 after half-up rounding
        assert_eq!(
            default_basket("B01, B01, R01, R01, R01")
                .total()
                .unwrap()
                .amount(),
            dec!(98.28)
        );
    }

    #[test]
    fn test_one_of_each() {
        // 24.95 + 7.95 + 32.95 = 65.85 => +2.95
        assert_eq!(
            default_basket("G01, B01, R01").total().unwrap().amount(),
            dec!(68.80)
        );
    }

    // -------------------------------------------------------------------------
    // Algorithm properties
    // -------------------------------------------------------------------------

    #[test]
    fn test_total_is_idempotent() {
        let basket = default_basket("R01, R01, B01");
        assert_eq!(basket.total().unwrap(), basket.total().unwrap());
    }

    #[test]
    fn test_total_depends_on_counts_not_positions() {
        // The offer tally counts units, so any permutation of the same
        // multiset prices identically.
        let orderings = [
            "B01, B01, R01, R01, R01",
            "R01, B01, R01, B01, R01",
            "R01, R01, R01, B01, B01",
        ];
        let totals: Vec<Money> = orderings
            .iter()
            .map(|items| default_basket(items).total().unwrap())
            .collect();
        assert!(totals.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_total_stays_within_sanity_bounds() {
        let basket = default_basket("R01, R01, G01, B01");
        let total = basket.total().unwrap();

        // Raw unit prices: 32.95 * 2 + 24.95 + 7.95 = 98.80
        let raw_sum = Money::new(dec!(98.80));
        let max_delivery = Money::from_major_minor(4, 95);
        // Discount floor: every unit at half price
        let floor = raw_sum.halved();

        assert!(total >= floor);
        assert!(total <= raw_sum + max_delivery);
    }

    #[test]
    fn test_add_returns_growing_item_slice() {
        let mut basket = Basket::new(PricingConfig::default());
        assert_eq!(basket.add("R01").unwrap().len(), 1);
        assert_eq!(basket.add("R01").unwrap().len(), 2);
        assert_eq!(basket.item_count(), 2);
        assert!(!basket.is_empty());
    }

    #[test]
    fn test_add_rejects_unknown_code_listing_valid_ones() {
        let mut basket = Basket::new(PricingConfig::default());
        let err = basket.add("X99").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown product code 'X99', valid codes are: R01, G01, B01"
        );
        assert!(basket.is_empty()); // nothing was appended
    }

    #[test]
    fn test_empty_delivery_schedule_surfaces_config_error() {
        let config = PricingConfig {
            catalog: Catalog::new(vec![Product::new(
                "B01",
                "Blue Widget",
                Money::from_major_minor(7, 95),
            )]),
            delivery: DeliverySchedule::new(Vec::new()),
            offers: crate::offer::OfferBook::none(),
        };
        let basket = Basket::with_items(vec!["B01"], config).unwrap();
        assert!(matches!(
            basket.total().unwrap_err(),
            CheckoutError::NoDeliveryRule { .. }
        ));
    }

    // -------------------------------------------------------------------------
    // Bulk input
    // -------------------------------------------------------------------------

    #[test]
    fn test_csv_input_trims_whitespace() {
        let basket = default_basket("  R01 ,G01,  B01  ");
        let listed: Vec<&str> = basket.items().iter().map(ProductCode::as_str).collect();
        assert_eq!(listed, ["R01", "G01", "B01"]);
    }

    #[test]
    fn test_csv_empty_segments_are_skipped() {
        assert!(default_basket("").is_empty());
        assert!(default_basket(" , ,").is_empty());
    }

    #[test]
    fn test_code_list_input() {
        let basket = Basket::with_items(vec!["R01", "R01"], PricingConfig::default()).unwrap();
        assert_eq!(basket.item_count(), 2);
    }

    #[test]
    fn test_with_items_propagates_unknown_product() {
        let err = Basket::with_items("R01, X99", PricingConfig::default()).unwrap_err();
        assert!(matches!(err, CheckoutError::UnknownProduct { .. }));
    }

    #[test]
    fn test_json_string_and_list_inputs() {
        let csv = ItemsInput::try_from(json!("R01, G01")).unwrap();
        let basket = Basket::with_items(csv, PricingConfig::default()).unwrap();
        assert_eq!(basket.item_count(), 2);

        let list = ItemsInput::try_from(json!(["B01", "B01"])).unwrap();
        let basket = Basket::with_items(list, PricingConfig::default()).unwrap();
        assert_eq!(basket.item_count(), 2);
    }

    #[test]
    fn test_json_number_is_rejected() {
        let err = ItemsInput::try_from(json!(42)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "items must be a list of product codes or a comma-separated string, got a number"
        );
    }

    #[test]
    fn test_json_list_with_non_string_entry_is_rejected() {
        let err = ItemsInput::try_from(json!(["R01", 7])).unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidItemsType { .. }));
    }
}
