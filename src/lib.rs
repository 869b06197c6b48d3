//! Contact App - a server-rendered contact manager.
//!
//! Lists, adds, edits, deletes and shows contacts (name, email, mobile
//! number), validating every write on the server and reporting success
//! through one-shot flash messages.
//!
//! # Architecture
//!
//! - **domain**: Contact ids and the email / mobile number predicates
//! - **models**: The contact record and the form payloads
//! - **store**: The `ContactStore` trait with in-memory and JSON-file backends
//! - **validation**: Name availability and the field-tagged rule set
//! - **services**: The validate-then-mutate contact workflow
//! - **session**: Session ids and the read-once flash store
//! - **web**: Axum routes, views, method override and session cookies
//! - **config** / **error**: Environment configuration and error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod store;
pub mod validation;
pub mod web;

pub use config::Config;
pub use error::{ConfigError, RenderError, StoreError};
pub use models::{Contact, ContactForm, DeleteContactForm, NewContact, UpdateContactForm};
pub use services::{ContactWorkflow, Outcome, Rejection};
pub use session::{FlashStore, SessionId};
pub use store::{ContactStore, InMemoryContactStore, JsonFileContactStore};
pub use web::{app, router, AppState};
