//! Address Book - an in-memory contact book with validated fields.
//!
//! Contacts are [`Record`]s holding a name, any number of ten-digit phone
//! numbers, and an optional birthday. Records are filed by name in an
//! [`AddressBook`], which can be listed page by page.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`) behind the `Field` trait
//! - **models**: `Record` and `AddressBook`
//! - **error**: Error types for record mutation and configuration
//! - **config**: Configuration from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{ConfigError, RecordError, RecordResult};
pub use models::{AddressBook, Pages, Record};
