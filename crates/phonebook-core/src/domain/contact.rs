use crate::domain::name::Name;
use crate::domain::phone::PhoneNumber;
use std::fmt;

/// A named contact and its phones in insertion order. The name never
/// changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: Name,
    phones: Vec<PhoneNumber>,
}

impl Contact {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn with_phone(name: Name, phone: PhoneNumber) -> Self {
        Self {
            name,
            phones: vec![phone],
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn has_phone(&self, phone: &PhoneNumber) -> bool {
        self.phones.contains(phone)
    }

    /// Appends without de-duplication.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Removes the first phone equal to `old` and appends `new`.
    /// Returns `false` and leaves the list untouched when `old` is absent.
    pub fn change_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> bool {
        match self.phones.iter().position(|phone| phone == old) {
            Some(idx) => {
                self.phones.remove(idx);
                self.phones.push(new);
                true
            }
            None => false,
        }
    }

    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> bool {
        match self.phones.iter().position(|existing| existing == phone) {
            Some(idx) => {
                self.phones.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn remove_all_phones(&mut self) {
        self.phones.clear();
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (idx, phone) in self.phones.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
