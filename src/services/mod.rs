//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between the
//! store, the validation rules and the flash channel. They provide a clean
//! boundary between the HTTP handlers and the data access layer.

mod contact_workflow;

pub use contact_workflow::{
    ContactListing, ContactWorkflow, Outcome, Rejection, CREATED_MESSAGE, DELETED_MESSAGE,
    UPDATED_MESSAGE,
};
