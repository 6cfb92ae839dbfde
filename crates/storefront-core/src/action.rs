//! Actions: the store's mutation surface as first-class values.
//!
//! ## Learning: The Command Pattern
//!
//! Every mutation the frontend can trigger is a variant here. Actions can
//! be parsed from user input, queued on a channel, logged, and replayed —
//! which is exactly how the deferred counter reset comes back into the
//! store.

use storefront_catalog::ProductId;

use crate::contact::ContactId;

/// A single store mutation, as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    // Session
    Login,
    Logout,

    // Cart
    AddToCart { product_id: ProductId },
    RemoveFromCart { product_id: ProductId },

    // Counter
    AddToCounter { amount: i64 },
    ResetCounter { generation: u64 },

    // Name form
    SetDraftName { name: String },
    ConfirmName,
    ClearNameForm,

    // Details toggle
    ToggleDetails,

    // Contacts
    AddContact {
        name: String,
        email: String,
        phone: Option<String>,
    },
    RemoveContact { id: ContactId },
}

impl Action {
    /// Returns the action's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::Login => "Log In",
            Action::Logout => "Log Out",
            Action::AddToCart { .. } => "Add to Cart",
            Action::RemoveFromCart { .. } => "Remove from Cart",
            Action::AddToCounter { .. } => "Add to Counter",
            Action::ResetCounter { .. } => "Reset Counter",
            Action::SetDraftName { .. } => "Set Draft Name",
            Action::ConfirmName => "Confirm Name",
            Action::ClearNameForm => "Clear Name Form",
            Action::ToggleDetails => "Toggle Details",
            Action::AddContact { .. } => "Add Contact",
            Action::RemoveContact { .. } => "Remove Contact",
        }
    }
}
