//! Product records.
//!
//! ## Learning: Type Aliases and Newtypes
//!
//! `ProductId` is a newtype wrapper around `u32`. This provides:
//! - Type safety: Can't accidentally use a quantity as a product ID
//! - Encapsulation: Can change the underlying type without breaking APIs
//! - Documentation: The type name explains its purpose

use serde::{Deserialize, Serialize};

/// Unique identifier for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product ID from a raw number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric ID.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// A single product record.
///
/// Prices are stored in minor currency units (cents) so that cart totals
/// stay exact integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Image URL for the product card
    pub image: String,

    /// Unit price in minor currency units (cents)
    pub price: u64,
}

impl Product {
    /// Creates a new product record.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            price,
        }
    }

    /// Formats the unit price as a decimal string, e.g. `"12.99"`.
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }
}

/// Formats a price in minor units as a decimal string.
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_roundtrip() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_price_display() {
        let product = Product::new(1, "Mug", "mug.png", 1299);
        assert_eq!(product.price_display(), "12.99");
        assert_eq!(format_price(5), "0.05");
        assert_eq!(format_price(100), "1.00");
    }
}
