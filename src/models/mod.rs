//! Data models for contacts and the forms that change them.

pub mod contact;

pub use contact::{Contact, ContactForm, DeleteContactForm, NewContact, UpdateContactForm};
