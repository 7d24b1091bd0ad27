//! The `Field` trait shared by every validated value object.

use super::errors::ValidationError;

/// A value object whose contents are checked on every write.
///
/// [`Field::parse`] is the validation predicate that turns raw text into the
/// stored value. Implementors route both `new` and `set_value` through it, so
/// a field can never hold a value its predicate would reject.
pub trait Field: Sized {
    /// The stored representation (text for names and phones, a date for birthdays).
    type Value;

    /// Validate raw text and convert it into the stored representation.
    fn parse(raw: &str) -> Result<Self::Value, ValidationError>;

    /// Build a field from raw text.
    ///
    /// # Errors
    ///
    /// Returns the implementor's `ValidationError` if `raw` is rejected.
    fn new(raw: &str) -> Result<Self, ValidationError>;

    /// Borrow the stored value.
    fn value(&self) -> &Self::Value;

    /// Replace the stored value with `raw`.
    ///
    /// On failure the previous value is left untouched.
    fn set_value(&mut self, raw: &str) -> Result<(), ValidationError>;
}
