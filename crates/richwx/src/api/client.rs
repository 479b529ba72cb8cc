//! Blocking NWS API client.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::model::{Alert, Feature, FeatureCollection, Problem};
use crate::settings::UserAgent;

pub const DEFAULT_API_BASE: &str = "https://api.weather.gov";

/// Where alerts come from.
pub trait AlertSource {
    /// Active alerts for a validated area code such as `MA`.
    fn active_alerts(&self, area: &str) -> Result<Vec<Alert>, ApiError>;

    /// One alert by its full `urn:oid:...` identifier.
    fn alert(&self, id: &str) -> Result<Alert, ApiError>;
}

/// Talks to `api.weather.gov` (or a compatible base URL).
pub struct NwsClient {
    http: Client,
    base: String,
}

impl NwsClient {
    /// Builds a client that identifies itself with `user_agent`.
    pub fn new(base: &str, user_agent: &UserAgent) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json"));

        let http = Client::builder()
            .user_agent(user_agent.header_value())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL, without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        log::info!("GET {url}");

        let response = self.http.get(&url).query(query).send()?;
        let status = response.status();
        log::debug!("{url} answered {status}");

        if !status.is_success() {
            let problem = response.json::<Problem>().unwrap_or_default();
            return Err(status_error(status, problem));
        }

        Ok(response.json()?)
    }
}

/// A non-success answer; the problem body may be empty.
fn status_error(status: StatusCode, problem: Problem) -> ApiError {
    ApiError::Status {
        status: status.as_u16(),
        title: problem
            .title
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string()),
        detail: problem.detail,
    }
}

impl AlertSource for NwsClient {
    fn active_alerts(&self, area: &str) -> Result<Vec<Alert>, ApiError> {
        let collection: FeatureCollection = self.get("/alerts/active", &[("area", area)])?;
        Ok(collection.into_alerts())
    }

    fn alert(&self, id: &str) -> Result<Alert, ApiError> {
        let feature: Feature = self.get(&format!("/alerts/{}", id), &[])?;
        Ok(feature.properties)
    }
}
