//! Contact persistence.
//!
//! The workflow talks to a [`ContactStore`] trait object; which backend sits
//! behind it is decided once at startup.

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileContactStore;
pub use memory::InMemoryContactStore;
pub use traits::ContactStore;
