pub mod error;

use crate::error::{Result, StoreError};
use indexmap::IndexMap;
use phonebook_core::{Contact, Name, PhoneNumber};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhonePolicy {
    #[default]
    AllowDuplicates,
    RejectDuplicates,
}

/// In-memory contacts keyed by normalized name. Iteration follows the
/// order in which each name was first inserted.
#[derive(Debug, Default)]
pub struct AddressBook {
    contacts: IndexMap<String, Contact>,
    policy: PhonePolicy,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PhonePolicy) -> Self {
        Self {
            contacts: IndexMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> PhonePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, name: &Name) -> Option<&Contact> {
        self.contacts.get(name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// Appends `phone` to an existing contact, or inserts a new contact
    /// holding just that phone.
    pub fn upsert(&mut self, name: Name, phone: PhoneNumber) -> Result<&Contact> {
        let policy = self.policy;
        let contact = match self.contacts.entry(name.as_str().to_string()) {
            indexmap::map::Entry::Occupied(entry) => {
                let contact = entry.into_mut();
                if policy == PhonePolicy::RejectDuplicates && contact.has_phone(&phone) {
                    return Err(StoreError::DuplicatePhone {
                        name: name.to_string(),
                        phone: phone.to_string(),
                    });
                }
                contact.add_phone(phone);
                debug!(name = %name, phones = contact.phones().len(), "phone appended");
                contact
            }
            indexmap::map::Entry::Vacant(entry) => {
                debug!(name = %name, "contact created");
                entry.insert(Contact::with_phone(name, phone))
            }
        };
        Ok(contact)
    }

    /// Returns whether the contact existed. Absent names are a no-op.
    pub fn remove(&mut self, name: &Name) -> bool {
        self.contacts.shift_remove(name.as_str()).is_some()
    }

    pub fn change_contact_phone(&mut self, name: &str, old: &str, new: &str) -> Result<&Contact> {
        let name = Name::new(name)?;
        let policy = self.policy;
        let contact = self
            .contacts
            .get_mut(name.as_str())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        let old = PhoneNumber::new(old)?;
        let new = PhoneNumber::new(new)?;

        if !contact.has_phone(&old) {
            return Err(StoreError::PhoneNotFound {
                name: name.to_string(),
                phone: old.to_string(),
            });
        }
        if policy == PhonePolicy::RejectDuplicates && old != new && contact.has_phone(&new) {
            return Err(StoreError::DuplicatePhone {
                name: name.to_string(),
                phone: new.to_string(),
            });
        }

        contact.change_phone(&old, new);
        Ok(contact)
    }

    pub fn render(&self, name: &str) -> Result<String> {
        let name = Name::new(name)?;
        self.get(&name)
            .map(Contact::render)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn render_all(&self) -> Vec<String> {
        self.iter().map(Contact::render).collect()
    }
}
