//! The cart ledger data structure.
//!
//! ## Learning: Invariants in Plain Structs
//!
//! `CartLedger` caches its totals instead of recomputing them on every
//! read, the way the original UI store did. Keeping the cached values and
//! the lines in sync is the whole job of this module, so the fields are
//! private and every mutation goes through `add` or `remove`.
//!
//! Invariants:
//! - At most one line per product ID (repeat adds merge by quantity).
//! - `total_quantity` equals the sum of line quantities.
//! - `total_price` equals the sum of `price * quantity` over all lines.

use serde::{Deserialize, Serialize};
use storefront_catalog::{Product, ProductId};

use crate::{CartError, CartResult};

/// One product's aggregated entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line aggregates
    pub product_id: ProductId,

    /// Display title, copied from the catalog at first add
    pub title: String,

    /// Image URL, copied from the catalog at first add
    pub image: String,

    /// Unit price in minor currency units
    pub price: u64,

    /// How many units of this product are in the cart
    pub quantity: u32,
}

impl CartLine {
    /// Returns the total price of this line (`price * quantity`).
    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

/// The in-memory cart state: lines plus running totals.
///
/// Created empty at session start and owned by the session for its
/// lifetime. Lines keep their insertion order, matching how the original
/// store rendered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLedger {
    lines: Vec<CartLine>,
    total_price: u64,
    total_quantity: u32,
}

impl CartLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented; otherwise a new line with quantity 1 is appended.
    /// Either way the ledger-wide totals grow by one unit and one unit
    /// price.
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product_id: product.id,
                title: product.title.clone(),
                image: product.image.clone(),
                price: product.price,
                quantity: 1,
            }),
        }
        self.total_quantity += 1;
        self.total_price += product.price;
    }

    /// Removes a product's line from the cart entirely.
    ///
    /// The removed line's full quantity and line total are subtracted from
    /// the ledger-wide totals. Returns the removed line.
    pub fn remove(&mut self, id: ProductId) -> CartResult<CartLine> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_id == id)
            .ok_or(CartError::LineNotFound(id))?;

        let line = self.lines.remove(index);
        self.total_quantity -= line.quantity;
        self.total_price -= line.line_total();
        Ok(line)
    }

    // ==================== Read Projections ====================

    /// Returns the cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == id)
    }

    /// Returns the running total price in minor currency units.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Returns the running total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.total_quantity
    }

    /// Returns the number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Product;

    fn product(id: u32, price: u64) -> Product {
        Product::new(id, format!("Product {id}"), format!("{id}.png"), price)
    }

    #[test]
    fn test_add_appends_new_line() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 1000));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.total_price(), 1000);
    }

    #[test]
    fn test_repeat_add_merges_lines() {
        let mut cart = CartLedger::new();
        let p = product(1, 1000);
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_price(), 2000);
    }

    #[test]
    fn test_remove_restores_totals() {
        let mut cart = CartLedger::new();
        cart.add(&product(1, 1000));
        let before = cart.clone();

        cart.add(&product(2, 750));
        cart.add(&product(2, 750));
        let removed = cart.remove(ProductId::new(2)).unwrap();

        assert_eq!(removed.quantity, 2);
        assert_eq!(removed.line_total(), 1500);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_to_empty() {
        let mut cart = CartLedger::new();
        let p = product(1, 1000);
        cart.add(&p);
        cart.add(&p);
        cart.remove(p.id).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn test_remove_missing_line_fails() {
        let mut cart = CartLedger::new();
        let err = cart.remove(ProductId::new(9));
        assert!(matches!(err, Err(CartError::LineNotFound(id)) if id == ProductId::new(9)));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartLedger::new();
        cart.add(&product(3, 10));
        cart.add(&product(1, 20));
        cart.add(&product(3, 10));
        cart.add(&product(2, 30));

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product_id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn check_invariants(cart: &CartLedger) {
            let qty: u32 = cart.lines().iter().map(|l| l.quantity).sum();
            let price: u64 = cart.lines().iter().map(CartLine::line_total).sum();
            assert_eq!(cart.total_quantity(), qty);
            assert_eq!(cart.total_price(), price);

            let mut ids: Vec<ProductId> =
                cart.lines().iter().map(|l| l.product_id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), cart.len(), "duplicate line for a product");
        }

        proptest! {
            // Totals track the line sums under any add/remove sequence.
            #[test]
            fn totals_track_line_sums(ops in prop::collection::vec((0u32..4, prop::bool::ANY), 0..64)) {
                let products: Vec<Product> = (0..4)
                    .map(|i| Product::new(i, format!("P{i}"), "p.png", u64::from(i) * 250 + 100))
                    .collect();

                let mut cart = CartLedger::new();
                for (index, is_add) in ops {
                    let product = &products[index as usize];
                    if is_add {
                        cart.add(product);
                    } else {
                        // Removing an absent line is a no-op for the invariant.
                        let _ = cart.remove(product.id);
                    }
                    check_invariants(&cart);
                }
            }
        }
    }
}
