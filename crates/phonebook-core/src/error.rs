use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is required")]
    EmptyName,
    #[error("phone number is empty after sanitization: {0:?}")]
    EmptyPhone(String),
}
