//! Selection state of an interactive session: which canteen, which day.

use chrono::NaiveDate;
use openmensa_api::types::CanteenID;

use crate::error::MensaError;
use crate::validation::{validate_canteen_id, validate_date};

/// The canteen and date the user has chosen so far.
///
/// Starts with no canteen selected and the date the session was opened on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    canteen: Option<CanteenID>,
    date: NaiveDate,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            canteen: None,
            date: today,
        }
    }

    pub fn canteen(&self) -> Option<CanteenID> {
        self.canteen
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn select_canteen(&mut self, canteen_id: CanteenID) {
        self.canteen = Some(canteen_id);
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Parses and applies a canteen ID typed by the user.
    ///
    /// On error the previous selection is kept.
    pub fn select_canteen_input(&mut self, input: &str) -> Result<CanteenID, MensaError> {
        let id = validate_canteen_id(input)?;
        self.select_canteen(id);
        Ok(id)
    }

    /// Parses and applies a `YYYY-MM-DD` date typed by the user.
    ///
    /// On error the previous date is kept.
    pub fn set_date_input(&mut self, input: &str) -> Result<NaiveDate, MensaError> {
        let date = validate_date(input)?;
        self.set_date(date);
        Ok(date)
    }
}
