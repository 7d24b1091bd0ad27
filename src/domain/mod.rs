//! Domain value objects.
//!
//! This module contains the validated fields a contact is made of: names,
//! phone numbers, and birthdays. Each implements [`Field`], so invalid data
//! cannot be stored in them either at construction or on reassignment.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
