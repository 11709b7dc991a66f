//! # Error Types
//!
//! Domain errors for the pricing engine.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (offending code, valid codes, subtotal)
//! 3. Errors are enum variants, never String
//! 4. Everything is synchronous and fail-fast: no retries, no partial results

use thiserror::Error;

use crate::catalog::ProductCode;
use crate::money::Money;

/// Joins product codes for error messages: `R01, G01, B01`.
fn code_list(codes: &[ProductCode]) -> String {
    codes
        .iter()
        .map(ProductCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Pricing engine errors.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The code being added is not in the catalog.
    ///
    /// Carries the valid codes, in catalog order, so the caller can present
    /// them.
    #[error("unknown product code '{code}', valid codes are: {}", code_list(.known))]
    UnknownProduct {
        code: ProductCode,
        known: Vec<ProductCode>,
    },

    /// No delivery rule covers the computed subtotal.
    ///
    /// A correctly configured schedule ends with a zero-minimum rule, so this
    /// is a configuration precondition violation rather than a pricing
    /// outcome.
    #[error("no delivery rule covers subtotal {subtotal}")]
    NoDeliveryRule { subtotal: Money },

    /// An untyped items value was neither a list of codes nor a
    /// comma-separated string.
    #[error("items must be a list of product codes or a comma-separated string, got {found}")]
    InvalidItemsType { found: String },
}

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
