//! HTTP client for the OpenMensa API v2.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{CanteenQuery, Query},
    types::{Canteen, CanteenDay, CanteenID, Meal, Page, PageInfo},
    Error,
};

/// Production endpoint of the public OpenMensa API.
pub const DEFAULT_BASE_URL: &str = "https://openmensa.org/api/v2";

/// Per-request timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("openmensa-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the OpenMensa API v2.
///
/// Holds a single `reqwest::Client`, so concurrent page requests share one
/// connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    http: reqwest::Client,
}

/// Status, headers and raw body of a finished request.
struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl Client {
    /// Creates a new client pointing at the production OpenMensa API.
    pub fn new() -> Result<Self, Error> {
        Self::with_options(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_options(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a new client with a custom base URL and per-request timeout.
    pub fn with_options(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn send<Q>(&self, path: &str, query: Option<&Q>) -> Result<RawResponse, Error>
    where
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Sends the request and rejects non-success statuses.
    async fn get<Q>(&self, path: &str, query: Option<&Q>) -> Result<RawResponse, Error>
    where
        Q: Query,
    {
        let resp = self.send(path, query).await?;
        if !resp.status.is_success() {
            let snippet = truncate_body(&resp.body);
            if resp.status == StatusCode::NOT_FOUND {
                tracing::debug!("Resource not found: {}", path);
            } else {
                tracing::error!("Request failed with status {}: {}", resp.status, snippet);
            }
            return Err(Error::HttpStatus {
                status: resp.status.as_u16(),
                body: snippet,
            });
        }
        Ok(resp)
    }

    /// Fetches one page of the canteen directory.
    ///
    /// Pagination metadata comes from the `X-*` headers; an empty body yields a
    /// page with `body: None`.
    pub async fn get_canteens(&self, query: &CanteenQuery) -> Result<Page<Canteen>, Error> {
        let resp = self.get("/canteens", Some(query)).await?;
        let info = PageInfo::from_headers(&resp.headers);
        let body = parse_body::<Vec<Canteen>>(&resp.body)?;
        Ok(Page::new(body, info))
    }

    /// Fetches the opening state of a canteen on `date` (`YYYY-MM-DD`).
    ///
    /// Returns `Ok(None)` when the server knows nothing about that day (404 or
    /// empty body).
    pub async fn get_canteen_state(
        &self,
        canteen_id: CanteenID,
        date: &str,
    ) -> Result<Option<CanteenDay>, Error> {
        let path = format!("/canteens/{}/days/{}", canteen_id, date);
        match self.get::<CanteenQuery>(&path, None).await {
            Ok(resp) => parse_body(&resp.body),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Fetches the meals a canteen serves on `date` (`YYYY-MM-DD`).
    pub async fn get_meals(&self, canteen_id: CanteenID, date: &str) -> Result<Vec<Meal>, Error> {
        let path = format!("/canteens/{}/days/{}/meals", canteen_id, date);
        let resp = self.get::<CanteenQuery>(&path, None).await?;
        Ok(parse_body(&resp.body)?.unwrap_or_default())
    }
}

/// Parses a JSON body, treating a blank body (or a bare `null`) as absent.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>, Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::ParseFailed(e.to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_body_blank_is_none() {
        assert_eq!(parse_body::<Vec<Meal>>("").unwrap(), None);
        assert_eq!(parse_body::<Vec<Meal>>("  \n").unwrap(), None);
        assert_eq!(parse_body::<Vec<Meal>>("null").unwrap(), None);
    }

    #[test]
    fn parse_body_invalid_json_is_error() {
        let err = parse_body::<Vec<Meal>>("{not json").unwrap_err();
        assert!(matches!(err, Error::ParseFailed(_)));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "ä".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn debug_output_names_base_url() {
        let client = Client::with_base_url("http://localhost:8080/api/v2").unwrap();
        assert!(format!("{:?}", client).contains("http://localhost:8080/api/v2"));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = Client::with_base_url("http://localhost:8080/api/v2/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api/v2");
        let url = client
            .get_url("/canteens", Some(&CanteenQuery::default()))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v2/canteens");
    }
}
