//! Meal lookup gated on the canteen being open.

use std::fmt;

use chrono::NaiveDate;
use openmensa_api::types::{CanteenID, Meal};
use serde::Serialize;

use crate::error::MensaError;
use crate::source::MensaSource;
use crate::validation::format_api_date;

/// User-facing reason why a meal listing came back empty without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// No canteen was selected; nothing was requested.
    NoSelection,
    /// The canteen is closed that day, or its state could not be determined.
    Closed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoSelection => "No canteen is selected.",
            Notice::Closed => "Seems like the canteen is currently closed.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Meals for one canteen and day, or a notice explaining why there are none.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MealListing {
    pub meals: Vec<Meal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl MealListing {
    pub fn served(meals: Vec<Meal>) -> Self {
        Self {
            meals,
            notice: None,
        }
    }

    pub fn with_notice(notice: Notice) -> Self {
        Self {
            meals: Vec::new(),
            notice: Some(notice),
        }
    }
}

/// Returns the selected canteen, or [`Notice::NoSelection`] when there is none.
///
/// Negative IDs count as "not selected".
pub fn require_selection(canteen: Option<CanteenID>) -> Result<CanteenID, Notice> {
    match canteen {
        Some(id) if id >= 0 => Ok(id),
        _ => Err(Notice::NoSelection),
    }
}

/// Fetches the meals of `canteen` on `date`, but only if the canteen reports
/// itself open that day.
///
/// * no selection: returns [`Notice::NoSelection`] without touching `source`.
/// * state closed, unknown, or the state request failed: returns
///   [`Notice::Closed`] and never requests the meals.
/// * open: returns the meals; a failing meal request is an error.
pub async fn fetch_if_open<S>(
    source: &S,
    canteen: Option<CanteenID>,
    date: NaiveDate,
) -> Result<MealListing, MensaError>
where
    S: MensaSource + ?Sized,
{
    let canteen_id = match require_selection(canteen) {
        Ok(id) => id,
        Err(notice) => return Ok(MealListing::with_notice(notice)),
    };
    let date = format_api_date(date);

    let open = match source.fetch_canteen_state(canteen_id, &date).await {
        Ok(Some(state)) => !state.closed,
        Ok(None) => {
            tracing::debug!("No state known for canteen {} on {}", canteen_id, date);
            false
        }
        Err(e) => {
            tracing::warn!(
                "State query for canteen {} on {} failed: {}",
                canteen_id,
                date,
                e
            );
            false
        }
    };
    if !open {
        return Ok(MealListing::with_notice(Notice::Closed));
    }

    let meals = source.fetch_meals(canteen_id, &date).await?;
    tracing::debug!(
        "Canteen {} serves {} meals on {}",
        canteen_id,
        meals.len(),
        date
    );
    Ok(MealListing::served(meals))
}
