//! # Storefront Core
//!
//! The store facade and its state management.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Store                             │
//! │  ┌──────────┐ ┌─────────┐ ┌─────────┐ ┌──────────────┐  │
//! │  │   Cart   │ │ Counter │ │ Widgets │ │  ContactBook │  │
//! │  └──────────┘ └─────────┘ └─────────┘ └──────────────┘  │
//! │        │            │                                    │
//! │  ┌─────┴────┐ ┌─────┴─────────────────────────────────┐ │
//! │  │ Catalog  │ │  EventBus (observers notified after   │ │
//! │  │ (trait)  │ │  every state transition)              │ │
//! │  └──────────┘ └───────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The store replaces the ambient singleton of the original UI framework
//! version with a single owned value: callers hold the `Store`, mutate it
//! through methods (or [`Action`] dispatch), and subscribe to the event bus
//! for reactions. Derived values are plain methods, not tracked
//! dependencies.

pub mod action;
pub mod config;
pub mod contact;
pub mod counter;
pub mod event;
pub mod store;
pub mod widgets;

pub use action::Action;
pub use config::StoreConfig;
pub use contact::{Contact, ContactBook, ContactId};
pub use counter::{Counter, CounterStatus};
pub use event::{EventBus, EventStream, StoreEvent};
pub use store::Store;

use storefront_catalog::ProductId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Contact not found: {0}")]
    ContactNotFound(ContactId),

    #[error("Cart error: {0}")]
    Cart(#[from] storefront_cart::CartError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] storefront_catalog::CatalogError),

    #[error("Config error: {0}")]
    Config(String),
}
