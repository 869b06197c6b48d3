//! Domain value objects and field predicates.
//!
//! Contact ids are wrapped in a type that cannot be empty. Email and mobile
//! numbers stay plain strings on the contact itself and are checked by the
//! predicates in [`email`] and [`phone`] at write time.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::is_valid_email;
pub use errors::ValidationError;
pub use phone::{is_valid_mobile, MobileFormat};
