//! # Checkout Demo
//!
//! Prices a fixed set of example baskets against the default widget store
//! configuration and prints one line per basket:
//!
//! ```text
//! Items: B01, G01 - Price: $37.85
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p checkout-demo
//! ```

use checkout_core::{Basket, PricingConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Example baskets, as comma-separated product codes.
const DEMO_BASKETS: &[&str] = &[
    "",
    "B01, G01",
    "R01, R01",
    "R01, G01",
    "B01, B01, R01, R01, R01",
    "G01, B01, R01",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = PricingConfig::default();
    info!(
        products = config.catalog.len(),
        delivery_tiers = config.delivery.len(),
        offers = config.offers.len(),
        "Loaded default store configuration"
    );

    for &items in DEMO_BASKETS {
        let basket = Basket::with_items(items, config.clone())?;
        let total = basket.total()?;

        let listed = basket
            .items()
            .iter()
            .map(|code| code.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        info!(items = %listed, units = basket.item_count(), total = %total, "Priced basket");
        println!("Items: {listed} - Price: {total}");
    }

    Ok(())
}
