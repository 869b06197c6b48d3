//! Field validation for contact writes.
//!
//! Format checks live in [`crate::domain`]; this module adds the one rule
//! that needs the store (name availability), attaches user-facing messages
//! to every rule, and evaluates them together.

mod rules;

pub use rules::{
    is_name_available, validate_contact, Field, FieldError, DUPLICATE_NAME_MESSAGE,
    INVALID_EMAIL_MESSAGE, INVALID_PHONE_MESSAGE,
};
