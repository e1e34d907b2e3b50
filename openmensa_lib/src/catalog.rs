//! Entry points the console layer calls: list every canteen, list meals.

use chrono::NaiveDate;
use openmensa_api::types::{Canteen, CanteenID};

use crate::error::MensaError;
use crate::meals::{fetch_if_open, MealListing};
use crate::paginate::collect_remaining;
use crate::session::Session;
use crate::source::MensaSource;

/// Catalog facade over a [`MensaSource`].
pub struct Catalog<S> {
    source: S,
}

impl<S: MensaSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches the whole canteen directory.
    ///
    /// The first page is requested without a page number; its headers decide
    /// how many more pages are fetched concurrently. Items keep page order.
    pub async fn list_all_canteens(&self) -> Result<Vec<Canteen>, MensaError> {
        let first = self.source.fetch_canteen_page(None).await?;
        let canteens =
            collect_remaining(first, |page| self.source.fetch_canteen_page(Some(page))).await?;
        tracing::debug!("Fetched {} canteens", canteens.len());
        Ok(canteens)
    }

    /// Meals for the session's selected canteen and date. See [`fetch_if_open`].
    pub async fn list_meals_for_selection(
        &self,
        session: &Session,
    ) -> Result<MealListing, MensaError> {
        fetch_if_open(&self.source, session.canteen(), session.date()).await
    }

    /// Meals for an explicit canteen and date. See [`fetch_if_open`].
    pub async fn list_meals(
        &self,
        canteen_id: CanteenID,
        date: NaiveDate,
    ) -> Result<MealListing, MensaError> {
        fetch_if_open(&self.source, Some(canteen_id), date).await
    }
}
