pub mod contact;
pub mod name;
pub mod phone;

pub use contact::Contact;
pub use name::{normalize_name, Name};
pub use phone::{normalize_phone, PhoneNumber};
