//! Test doubles shared by the integration tests.

pub mod mock_contact_store;

pub use mock_contact_store::MockContactStore;
