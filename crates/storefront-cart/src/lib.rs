//! # Storefront Cart
//!
//! The cart ledger: an ordered list of lines plus running totals, mutated
//! by exactly two operations (add, remove) and read through three
//! projections (lines, total price, total quantity).

pub mod ledger;

pub use ledger::{CartLedger, CartLine};

use storefront_catalog::ProductId;

/// Result type for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// Errors that can occur in cart operations.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("No cart line for product: {0}")]
    LineNotFound(ProductId),
}
