//! # Storefront Catalog
//!
//! Product records and the catalog provider the rest of the system looks
//! products up in. The store never stores full product data itself; it asks
//! a `Catalog` for the record behind a `ProductId`.
//!
//! ## Learning: Traits at the Seam
//!
//! The catalog is an external collaborator, so it sits behind a trait.
//! The in-memory implementation below is enough for the demo; a real shop
//! would put an HTTP or database client behind the same trait.

pub mod product;

pub use product::{Product, ProductId, format_price};

use std::path::Path;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A source of product records.
pub trait Catalog {
    /// Looks up a product by ID.
    fn product_by_id(&self, id: ProductId) -> Option<&Product>;

    /// Returns all products, in catalog order.
    fn products(&self) -> &[Product];

    /// Returns the number of products.
    fn len(&self) -> usize {
        self.products().len()
    }

    /// Returns true if the catalog has no products.
    fn is_empty(&self) -> bool {
        self.products().is_empty()
    }
}

/// An in-memory catalog, seeded in code or loaded from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from a list of products.
    ///
    /// Fails if two products share an ID.
    pub fn with_products(products: Vec<Product>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product)?;
        }
        Ok(catalog)
    }

    /// Loads a catalog from a JSON file containing an array of products.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        Self::with_products(products)
    }

    /// Returns the built-in demo catalog.
    pub fn demo() -> Self {
        // Unwrap is fine: the seed IDs are distinct by construction.
        Self::with_products(vec![
            Product::new(1, "Blue T-Shirt", "https://example.com/img/tshirt.png", 1999),
            Product::new(2, "Coffee Mug", "https://example.com/img/mug.png", 1299),
            Product::new(3, "Sticker Pack", "https://example.com/img/stickers.png", 499),
            Product::new(4, "Hoodie", "https://example.com/img/hoodie.png", 4999),
            Product::new(5, "Water Bottle", "https://example.com/img/bottle.png", 1599),
        ])
        .unwrap()
    }

    /// Adds a product to the catalog.
    pub fn insert(&mut self, product: Product) -> CatalogResult<()> {
        if self.product_by_id(product.id).is_some() {
            return Err(CatalogError::DuplicateProduct(product.id));
        }
        self.products.push(product);
        Ok(())
    }
}

impl Catalog for InMemoryCatalog {
    fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}
