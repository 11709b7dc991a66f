//! # checkout-core: Pure Pricing Logic for Widget Checkout
//!
//! Computes a shopping basket's total price from a product catalog, tiered
//! delivery rules, and multi-buy offers. Everything here is a pure function
//! over in-memory configuration: no I/O, no async, no shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 ★ checkout-core (THIS CRATE) ★               │
//! │                                                              │
//! │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌───────┐ ┌────────┐  │
//! │  │ catalog │ │ offer   │ │ delivery │ │ money │ │ basket │  │
//! │  │ Product │ │ Offer   │ │ Schedule │ │ Money │ │ Basket │  │
//! │  │ Catalog │ │ Book    │ │ Rule     │ │       │ │ total  │  │
//! │  └─────────┘ └─────────┘ └──────────┘ └───────┘ └────────┘  │
//! │                                                              │
//! │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Decimal money type, pinned half-up rounding
//! - [`catalog`] - Product codes, products, catalog lookup
//! - [`delivery`] - Tiered delivery schedule, first-match-wins
//! - [`offer`] - Multi-buy offers keyed by product code
//! - [`basket`] - The basket and its pricing algorithm
//! - [`config`] - Bundled pricing configuration with store defaults
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Basket, PricingConfig};
//!
//! let mut basket = Basket::new(PricingConfig::default());
//! basket.add("B01")?;
//! basket.add("G01")?;
//!
//! // 7.95 + 24.95 = 32.90 subtotal, plus 4.95 delivery
//! assert_eq!(basket.total()?.to_string(), "$37.85");
//! # Ok::<(), checkout_core::CheckoutError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod config;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offer;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Basket` instead of
// `use checkout_core::basket::Basket`.

pub use basket::{Basket, ItemsInput};
pub use catalog::{Catalog, Product, ProductCode};
pub use config::PricingConfig;
pub use delivery::{DeliveryRule, DeliverySchedule};
pub use error::{CheckoutError, CheckoutResult};
pub use money::Money;
pub use offer::{Offer, OfferBook};
