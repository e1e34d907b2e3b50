//! Library layer for the OpenMensa console client.
//!
//! Aggregates the paginated canteen directory, gates meal lookups on the
//! canteen being open, and carries the configuration, validation and session
//! state the binary needs.

pub mod catalog;
pub mod config;
pub mod error;
pub mod meals;
pub mod paginate;
pub mod session;
pub mod source;
pub mod validation;

pub use openmensa_api;
pub use openmensa_api::types;
pub use openmensa_api::{CanteenQuery, Near, Query};

pub use catalog::Catalog;
pub use config::ClientConfig;
pub use error::MensaError;
pub use meals::{MealListing, Notice};
pub use session::Session;
pub use source::{ApiSource, MensaSource};
