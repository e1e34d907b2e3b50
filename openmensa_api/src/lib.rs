//! Typed async client for the OpenMensa API v2.
//!
//! Canteen listings are paginated through response headers; per-day state and
//! meal listings are plain JSON documents.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{CanteenQuery, Near, Query, QueryCommon};
