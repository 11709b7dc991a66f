//! # Delivery Module
//!
//! Tiered delivery charges based on the basket subtotal.
//!
//! A schedule is an ordered list of threshold/cost pairs evaluated
//! first-match-wins: the first rule whose minimum the subtotal meets
//! contributes its cost. The engine does not sort — callers supply rules in
//! descending minimum order for tiered semantics, ending with a zero-minimum
//! catch-all.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;

// =============================================================================
// Delivery Rule
// =============================================================================

/// A single delivery tier: flat cost for subtotals at or above the minimum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRule {
    /// Smallest qualifying subtotal for this tier (inclusive).
    pub minimum_subtotal: Money,

    /// Flat delivery cost charged for this tier.
    pub cost: Money,
}

impl DeliveryRule {
    /// Creates a delivery tier.
    pub fn new(minimum_subtotal: Money, cost: Money) -> Self {
        DeliveryRule {
            minimum_subtotal,
            cost,
        }
    }
}

// =============================================================================
// Delivery Schedule
// =============================================================================

/// An ordered set of delivery tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySchedule {
    rules: Vec<DeliveryRule>,
}

impl DeliverySchedule {
    /// Creates a schedule from rules in evaluation order.
    pub fn new(rules: Vec<DeliveryRule>) -> Self {
        DeliverySchedule { rules }
    }

    /// Delivery cost for the given subtotal: first matching rule wins.
    ///
    /// Fails with [`CheckoutError::NoDeliveryRule`] when no rule covers the
    /// subtotal (empty or malformed schedule) — a silent undefined total is
    /// never returned.
    pub fn cost_for(&self, subtotal: Money) -> CheckoutResult<Money> {
        self.rules
            .iter()
            .find(|rule| subtotal >= rule.minimum_subtotal)
            .map(|rule| rule.cost)
            .ok_or(CheckoutError::NoDeliveryRule { subtotal })
    }

    /// Number of tiers in the schedule.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the schedule has no tiers.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
