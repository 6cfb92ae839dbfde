//! The store facade.
//!
//! ## Learning: The Facade Pattern
//!
//! `Store` gathers every piece of session state behind one owned value.
//! Frontends interact with `Store` alone, never with the individual
//! sub-states, and nothing here is a global: whoever creates the store
//! owns it and passes `&mut` to the code that mutates it.

use storefront_cart::{CartLedger, CartLine};
use storefront_catalog::{Catalog, ProductId};
use tokio::sync::broadcast;

use crate::action::Action;
use crate::config::StoreConfig;
use crate::contact::{Contact, ContactBook, ContactId};
use crate::counter::{Counter, CounterStatus};
use crate::event::{EventBus, StoreEvent};
use crate::widgets::{DetailsToggle, NameForm, ProfileCard};
use crate::{StoreError, StoreResult};

/// The session's state store.
///
/// ## Thread Safety
///
/// `Store` is designed to be owned by a single task (the frontend loop).
/// Deferred work — the counter reset timer — communicates back via an
/// action channel instead of sharing the store.
pub struct Store<C: Catalog> {
    /// Product lookup collaborator
    catalog: C,

    /// Cart ledger
    cart: CartLedger,

    /// Centralized auth flag
    logged_in: bool,

    /// Counter demo state
    counter: Counter,

    /// Greeting card data
    profile: ProfileCard,

    /// Name-confirmation form
    name_form: NameForm,

    /// Details paragraph toggle
    details: DetailsToggle,

    /// Contact list
    contacts: ContactBook,

    /// Store configuration
    config: StoreConfig,

    /// Event bus for observers
    event_bus: EventBus,
}

impl<C: Catalog> Store<C> {
    /// Creates a store with default configuration.
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, StoreConfig::default())
    }

    /// Creates a store with custom configuration.
    pub fn with_config(catalog: C, config: StoreConfig) -> Self {
        let counter = Counter::new(config.counter.threshold);
        let profile = ProfileCard::new(
            config.profile.name.clone(),
            config.profile.age,
            config.profile.avatar_url.clone(),
        );
        Self {
            catalog,
            cart: CartLedger::new(),
            logged_in: false,
            counter,
            profile,
            name_form: NameForm::new(),
            details: DetailsToggle::new(),
            contacts: ContactBook::new(),
            config,
            event_bus: EventBus::new(),
        }
    }

    // ==================== Session ====================

    /// Marks the session as logged in.
    pub fn login(&mut self) {
        if !self.logged_in {
            self.logged_in = true;
            self.emit(StoreEvent::LoggedIn);
        }
    }

    /// Marks the session as logged out.
    pub fn logout(&mut self) {
        if self.logged_in {
            self.logged_in = false;
            self.emit(StoreEvent::LoggedOut);
        }
    }

    /// Returns true if the session is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.logged_in
    }

    // ==================== Cart ====================

    /// Adds one unit of a product to the cart.
    ///
    /// The product is resolved through the catalog; an unknown ID fails
    /// with [`StoreError::ProductNotFound`] rather than being ignored.
    pub fn add_to_cart(&mut self, id: ProductId) -> StoreResult<()> {
        let product = self
            .catalog
            .product_by_id(id)
            .ok_or(StoreError::ProductNotFound(id))?;
        tracing::debug!(product = %product.title, "adding to cart");
        self.cart.add(product);
        self.emit_cart_changed();
        Ok(())
    }

    /// Removes a product's entire line from the cart.
    pub fn remove_from_cart(&mut self, id: ProductId) -> StoreResult<()> {
        let line = self.cart.remove(id)?;
        tracing::debug!(product = %line.title, quantity = line.quantity, "removed from cart");
        self.emit_cart_changed();
        Ok(())
    }

    /// Returns the cart lines in insertion order.
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Returns the cart's total price in minor currency units.
    pub fn cart_total_price(&self) -> u64 {
        self.cart.total_price()
    }

    /// Returns the cart's total quantity.
    pub fn cart_total_quantity(&self) -> u32 {
        self.cart.total_quantity()
    }

    // ==================== Counter ====================

    /// Returns the counter state.
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Derives the counter's display status.
    pub fn counter_status(&self) -> CounterStatus {
        self.counter.status()
    }

    /// Adds to the counter.
    ///
    /// When the value crosses above the threshold a reset generation is
    /// armed and [`StoreEvent::ResetScheduled`] is emitted; the frontend is
    /// expected to dispatch [`Action::ResetCounter`] after the delay.
    pub fn add_to_counter(&mut self, amount: i64) {
        let was_over = self.counter.over_threshold();
        let value = self.counter.add(amount);
        self.emit(StoreEvent::CounterChanged { value });

        if self.counter.over_threshold() && !was_over {
            let generation = self.counter.arm_reset();
            let delay = self.config.counter.reset_delay();
            tracing::debug!(value, generation, "counter over threshold, reset scheduled");
            self.emit(StoreEvent::ResetScheduled { generation, delay });
        }
    }

    /// Applies a deferred counter reset.
    ///
    /// Returns true if the reset was current and the counter went back to
    /// zero; a stale generation is ignored.
    pub fn reset_counter(&mut self, generation: u64) -> bool {
        if self.counter.reset(generation) {
            self.emit(StoreEvent::CounterReset { generation });
            self.emit(StoreEvent::CounterChanged { value: 0 });
            true
        } else {
            tracing::debug!(generation, "stale counter reset ignored");
            false
        }
    }

    // ==================== Profile ====================

    /// Returns the greeting card data.
    pub fn profile(&self) -> &ProfileCard {
        &self.profile
    }

    /// Derives the greeting line.
    pub fn greeting(&self) -> String {
        self.profile.greeting()
    }

    // ==================== Name Form ====================

    /// Updates the name form's draft field.
    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.name_form.set_draft(name);
    }

    /// Confirms the draft name.
    pub fn confirm_name(&mut self) {
        let name = self.name_form.confirm().to_string();
        self.emit(StoreEvent::NameConfirmed { name });
    }

    /// Clears the name form.
    pub fn clear_name_form(&mut self) {
        self.name_form.clear();
    }

    /// Returns the name form state.
    pub fn name_form(&self) -> &NameForm {
        &self.name_form
    }

    // ==================== Details Toggle ====================

    /// Flips the details paragraph.
    pub fn toggle_details(&mut self) {
        let visible = self.details.toggle();
        self.emit(StoreEvent::DetailsToggled { visible });
    }

    /// Returns true if the details paragraph is shown.
    pub fn details_visible(&self) -> bool {
        self.details.visible()
    }

    // ==================== Contacts ====================

    /// Adds a contact and returns its ID.
    pub fn add_contact(&mut self, contact: Contact) -> ContactId {
        let id = self.contacts.add(contact);
        self.emit(StoreEvent::ContactAdded(id));
        id
    }

    /// Removes a contact by ID.
    pub fn remove_contact(&mut self, id: ContactId) -> StoreResult<()> {
        self.contacts.remove(id)?;
        self.emit(StoreEvent::ContactRemoved(id));
        Ok(())
    }

    /// Returns contacts in insertion order.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    // ==================== Catalog / Config ====================

    /// Returns the catalog collaborator.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ==================== Events ====================

    /// Subscribes to store events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_bus.subscribe()
    }

    fn emit(&self, event: StoreEvent) {
        self.event_bus.emit(event);
    }

    fn emit_cart_changed(&self) {
        self.emit(StoreEvent::CartChanged {
            total_quantity: self.cart.total_quantity(),
            total_price: self.cart.total_price(),
        });
    }

    // ==================== Dispatch ====================

    /// Applies an action to the store.
    pub fn dispatch(&mut self, action: Action) -> StoreResult<()> {
        tracing::trace!(action = action.display_name(), "dispatch");
        match action {
            Action::Login => {
                self.login();
                Ok(())
            }
            Action::Logout => {
                self.logout();
                Ok(())
            }
            Action::AddToCart { product_id } => self.add_to_cart(product_id),
            Action::RemoveFromCart { product_id } => self.remove_from_cart(product_id),
            Action::AddToCounter { amount } => {
                self.add_to_counter(amount);
                Ok(())
            }
            Action::ResetCounter { generation } => {
                self.reset_counter(generation);
                Ok(())
            }
            Action::SetDraftName { name } => {
                self.set_draft_name(name);
                Ok(())
            }
            Action::ConfirmName => {
                self.confirm_name();
                Ok(())
            }
            Action::ClearNameForm => {
                self.clear_name_form();
                Ok(())
            }
            Action::ToggleDetails => {
                self.toggle_details();
                Ok(())
            }
            Action::AddContact { name, email, phone } => {
                let mut contact = Contact::new(name, email);
                if let Some(phone) = phone {
                    contact = contact.with_phone(phone);
                }
                self.add_contact(contact);
                Ok(())
            }
            Action::RemoveContact { id } => self.remove_contact(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CounterConfig;
    use storefront_catalog::InMemoryCatalog;

    fn demo_store() -> Store<InMemoryCatalog> {
        Store::new(InMemoryCatalog::demo())
    }

    #[test]
    fn test_add_to_cart_merges() {
        let mut store = demo_store();
        let id = ProductId::new(1);
        let price = store.catalog().product_by_id(id).unwrap().price;

        store.add_to_cart(id).unwrap();
        store.add_to_cart(id).unwrap();

        assert_eq!(store.cart_lines().len(), 1);
        assert_eq!(store.cart_lines()[0].quantity, 2);
        assert_eq!(store.cart_total_quantity(), 2);
        assert_eq!(store.cart_total_price(), 2 * price);
    }

    #[test]
    fn test_add_unknown_product_fails() {
        let mut store = demo_store();
        let err = store.add_to_cart(ProductId::new(999));
        assert!(matches!(err, Err(StoreError::ProductNotFound(_))));
        assert!(store.cart_lines().is_empty());
    }

    #[test]
    fn test_remove_restores_empty_cart() {
        let mut store = demo_store();
        let id = ProductId::new(2);
        store.add_to_cart(id).unwrap();
        store.add_to_cart(id).unwrap();
        store.remove_from_cart(id).unwrap();

        assert!(store.cart_lines().is_empty());
        assert_eq!(store.cart_total_quantity(), 0);
        assert_eq!(store.cart_total_price(), 0);
    }

    #[tokio::test]
    async fn test_login_emits_once() {
        let mut store = demo_store();
        let mut rx = store.subscribe();

        store.login();
        store.login();
        store.logout();

        assert!(matches!(rx.recv().await.unwrap(), StoreEvent::LoggedIn));
        assert!(matches!(rx.recv().await.unwrap(), StoreEvent::LoggedOut));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_counter_over_threshold_schedules_reset() {
        let config = StoreConfig {
            counter: CounterConfig {
                threshold: 37,
                reset_delay_ms: 10,
            },
            ..StoreConfig::default()
        };
        let mut store = Store::with_config(InMemoryCatalog::demo(), config);
        let mut rx = store.subscribe();

        store.add_to_counter(40);
        assert_eq!(store.counter_status(), CounterStatus::TooMuch);

        assert!(matches!(
            rx.recv().await.unwrap(),
            StoreEvent::CounterChanged { value: 40 }
        ));
        let generation = match rx.recv().await.unwrap() {
            StoreEvent::ResetScheduled { generation, .. } => generation,
            other => panic!("expected ResetScheduled, got {other:?}"),
        };

        assert!(store.reset_counter(generation));
        assert_eq!(store.counter().value(), 0);
        assert_eq!(store.counter_status(), CounterStatus::NotThereYet);
    }

    #[test]
    fn test_stale_reset_ignored() {
        let mut store = demo_store();

        store.add_to_counter(40);

        // Retrigger: drop back under, then cross again to arm generation 2.
        store.add_to_counter(-20);
        store.add_to_counter(30);

        assert!(!store.reset_counter(1));
        assert_eq!(store.counter().value(), 50);

        assert!(store.reset_counter(2));
        assert_eq!(store.counter().value(), 0);
    }

    #[tokio::test]
    async fn test_confirm_name() {
        let mut store = demo_store();
        let mut rx = store.subscribe();

        store.set_draft_name("Grace");
        store.confirm_name();

        assert_eq!(store.name_form().confirmed(), Some("Grace"));
        assert!(matches!(
            rx.recv().await.unwrap(),
            StoreEvent::NameConfirmed { name } if name == "Grace"
        ));
    }

    #[test]
    fn test_toggle_details() {
        let mut store = demo_store();
        assert!(!store.details_visible());
        store.toggle_details();
        assert!(store.details_visible());
        store.toggle_details();
        assert!(!store.details_visible());
    }

    #[test]
    fn test_dispatch_contact_roundtrip() {
        let mut store = demo_store();
        store
            .dispatch(Action::AddContact {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: Some("555-0100".to_string()),
            })
            .unwrap();

        let id = store.contacts().next().unwrap().id();
        store.dispatch(Action::RemoveContact { id }).unwrap();
        assert_eq!(store.contacts().count(), 0);

        let err = store.dispatch(Action::RemoveContact { id });
        assert!(matches!(err, Err(StoreError::ContactNotFound(_))));
    }

    #[test]
    fn test_dispatch_cart_actions() {
        let mut store = demo_store();
        store
            .dispatch(Action::AddToCart {
                product_id: ProductId::new(3),
            })
            .unwrap();
        store
            .dispatch(Action::RemoveFromCart {
                product_id: ProductId::new(3),
            })
            .unwrap();
        assert!(store.cart_lines().is_empty());
    }
}
