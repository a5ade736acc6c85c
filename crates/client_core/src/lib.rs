pub mod api;
pub mod config;
pub mod confirm;
pub mod error;
pub mod form;
pub mod store;

pub use api::{ContactApi, ContactListing, HttpContactApi};
pub use config::{load_settings, Settings};
pub use confirm::DeleteOutcome;
pub use error::ContactServiceError;
pub use form::{ContactForm, SubmitOutcome};
pub use store::{ContactStore, StoreState, View};

#[cfg(test)]
#[path = "tests/mock_service.rs"]
mod mock_service;

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod flow_tests;
