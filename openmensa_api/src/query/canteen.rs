//! Query builder for the `/canteens` listing.

use url::Url;

use super::common::{Query, QueryCommon};
use crate::types::CanteenID;

/// Geographic filter: only canteens within `dist` kilometres of a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Near {
    pub lat: f64,
    pub lng: f64,
    /// Search radius in kilometres. `None` uses the API default (10 km).
    pub dist: Option<f64>,
}

/// Filters for the paginated canteen listing.
#[derive(Clone, Debug, Default)]
pub struct CanteenQuery {
    pub common: QueryCommon,
    pub ids: Vec<CanteenID>,
    pub near: Option<Near>,
    pub has_coordinates: Option<bool>,
}

impl Query for CanteenQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if !self.ids.is_empty() {
            let ids = self
                .ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            url.query_pairs_mut().append_pair("ids", &ids);
        }
        if let Some(near) = self.near {
            url.query_pairs_mut()
                .append_pair("near[lat]", &near.lat.to_string())
                .append_pair("near[lng]", &near.lng.to_string());
            if let Some(dist) = near.dist {
                url.query_pairs_mut()
                    .append_pair("near[dist]", &dist.to_string());
            }
        }
        if let Some(has_coordinates) = self.has_coordinates {
            url.query_pairs_mut()
                .append_pair("hasCoordinates", &has_coordinates.to_string());
        }
        url
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl CanteenQuery {
    /// Restricts the listing to a single canteen ID. Can be called repeatedly.
    pub fn with_id(mut self, id: CanteenID) -> Self {
        self.ids.push(id);
        self
    }

    /// Restricts the listing to the given canteen IDs.
    pub fn with_ids(mut self, ids: &[CanteenID]) -> Self {
        self.ids.extend_from_slice(ids);
        self
    }

    /// Only canteens near the given point.
    pub fn with_near(mut self, near: Near) -> Self {
        self.near = Some(near);
        self
    }

    /// Only canteens with (or without) known coordinates.
    pub fn with_has_coordinates(mut self, has_coordinates: bool) -> Self {
        self.has_coordinates = Some(has_coordinates);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{CanteenQuery, Near, Query};

    #[test]
    fn test_canteen_query_defaults() {
        let url = Url::parse("https://example.com/canteens").unwrap();
        insta::assert_snapshot!(
            CanteenQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/canteens"
        );
    }

    #[test]
    fn test_canteen_query() {
        let url = Url::parse("https://example.com/canteens").unwrap();

        insta::assert_snapshot!(
            CanteenQuery::default()
                .with_page(3)
                .with_limit(50)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/canteens?page=3&limit=50"
        );

        insta::assert_snapshot!(
            CanteenQuery::default()
                .with_id(1)
                .with_ids(&[2, 3])
                .with_has_coordinates(true)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/canteens?ids=1%2C2%2C3&hasCoordinates=true"
        );
    }

    #[test]
    fn test_canteen_query_near() {
        let url = Url::parse("https://example.com/canteens").unwrap();
        let with_near = CanteenQuery::default()
            .with_near(Near {
                lat: 49.5,
                lng: 11.25,
                dist: Some(5.0),
            })
            .add_to_url(&url);
        let pairs: Vec<(String, String)> = with_near
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("near[lat]".to_string(), "49.5".to_string()),
                ("near[lng]".to_string(), "11.25".to_string()),
                ("near[dist]".to_string(), "5".to_string()),
            ]
        );
    }
}
