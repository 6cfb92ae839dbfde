//! Contact book state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{StoreError, StoreResult};

/// Unique identifier for a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Creates a new unique contact ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContactId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One entry in the contact book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    email: String,
    phone: Option<String>,
}

impl Contact {
    /// Creates a contact with a fresh ID.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Returns the contact ID.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Returns the contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the contact's phone number, if known.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Holds the contact list, preserving insertion order for display.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: HashMap<ContactId, Contact>,
    order: Vec<ContactId>,
}

impl ContactBook {
    /// Creates an empty contact book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact and returns its ID.
    pub fn add(&mut self, contact: Contact) -> ContactId {
        let id = contact.id();
        self.contacts.insert(id, contact);
        self.order.push(id);
        id
    }

    /// Removes a contact by ID.
    pub fn remove(&mut self, id: ContactId) -> StoreResult<Contact> {
        let contact = self
            .contacts
            .remove(&id)
            .ok_or(StoreError::ContactNotFound(id))?;
        self.order.retain(|&i| i != id);
        Ok(contact)
    }

    /// Returns a contact by ID.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.get(&id)
    }

    /// Returns contacts in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.order.iter().filter_map(|id| self.contacts.get(id))
    }

    /// Returns the number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns true if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
