use phonebook_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("contact not found: {0}")]
    NotFound(String),
    #[error("phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },
    #[error("phone {phone} already saved for {name}")]
    DuplicatePhone { name: String, phone: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Core,
    NotFound,
    PhoneNotFound,
    DuplicatePhone,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::PhoneNotFound { .. } => StoreErrorKind::PhoneNotFound,
            StoreError::DuplicatePhone { .. } => StoreErrorKind::DuplicatePhone,
        }
    }
}
