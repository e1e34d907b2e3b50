//! The async operations the core needs from the remote catalog.

use async_trait::async_trait;
use openmensa_api::types::{Canteen, CanteenDay, CanteenID, Meal, Page};
use openmensa_api::{CanteenQuery, Client, Query};

use crate::error::MensaError;

/// Remote catalog of canteens, their daily state and their meals.
///
/// Implemented over HTTP by [`ApiSource`]; tests substitute in-memory doubles.
#[async_trait]
pub trait MensaSource: Send + Sync {
    /// Fetches one page of canteens. `None` requests the server's first page.
    async fn fetch_canteen_page(&self, page: Option<u32>) -> Result<Page<Canteen>, MensaError>;

    /// Fetches whether a canteen is open on `date` (`YYYY-MM-DD`).
    async fn fetch_canteen_state(
        &self,
        canteen_id: CanteenID,
        date: &str,
    ) -> Result<Option<CanteenDay>, MensaError>;

    /// Fetches the meals of a canteen on `date` (`YYYY-MM-DD`).
    async fn fetch_meals(&self, canteen_id: CanteenID, date: &str)
        -> Result<Vec<Meal>, MensaError>;
}

/// [`MensaSource`] backed by the OpenMensa HTTP API.
///
/// Every canteen page request starts from `query`, so filters and page size
/// apply to all pages alike.
pub struct ApiSource {
    client: Client,
    query: CanteenQuery,
}

impl ApiSource {
    pub fn new(client: Client) -> Self {
        Self::with_query(client, CanteenQuery::default())
    }

    pub fn with_query(client: Client, query: CanteenQuery) -> Self {
        Self { client, query }
    }
}

#[async_trait]
impl MensaSource for ApiSource {
    async fn fetch_canteen_page(&self, page: Option<u32>) -> Result<Page<Canteen>, MensaError> {
        let query = match page {
            Some(page) => self.query.clone().with_page(page),
            None => self.query.clone(),
        };
        Ok(self.client.get_canteens(&query).await?)
    }

    async fn fetch_canteen_state(
        &self,
        canteen_id: CanteenID,
        date: &str,
    ) -> Result<Option<CanteenDay>, MensaError> {
        Ok(self.client.get_canteen_state(canteen_id, date).await?)
    }

    async fn fetch_meals(
        &self,
        canteen_id: CanteenID,
        date: &str,
    ) -> Result<Vec<Meal>, MensaError> {
        Ok(self.client.get_meals(canteen_id, date).await?)
    }
}
