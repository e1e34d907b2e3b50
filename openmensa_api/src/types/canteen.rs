//! Canteen-related types: the canteen directory and per-day opening state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Numeric identifier for a canteen.
pub type CanteenID = i64;

/// A canteen as returned by the `/canteens` listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canteen {
    /// Unique numeric canteen identifier.
    pub id: CanteenID,

    pub name: String,

    pub city: Option<String>,

    pub address: Option<String>,

    /// Latitude and longitude, if the canteen has been geocoded.
    pub coordinates: Option<[f64; 2]>,
}

/// Opening state of a canteen on one day, from `/canteens/{id}/days/{date}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanteenDay {
    pub date: NaiveDate,
    pub closed: bool,
}
