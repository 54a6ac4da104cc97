//! Reqwest-backed Nominatim geocoding adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::dto::NominatimPlaceDto;
use crate::domain::ports::{GeocodedPlace, GeocodingSource, GeocodingSourceError};

/// Public Nominatim search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

const DEFAULT_USER_AGENT: &str = "lunch-roulette-engine/0.1";

/// Nominatim adapter performing HTTP GET requests against one endpoint.
pub struct NominatimHttpSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl NominatimHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(endpoint, timeout, DEFAULT_USER_AGENT)
    }

    /// Build an adapter with an explicit outbound user agent.
    ///
    /// Nominatim's usage policy requires an identifying agent string.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        endpoint: Url,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: user_agent.into(),
        })
    }
}

#[async_trait]
impl GeocodingSource for NominatimHttpSource {
    async fn search(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<GeocodedPlace>, GeocodingSourceError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("format", "json"), ("q", query), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|error| GeocodingSourceError::transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingSourceError::transport(format!(
                "status {}",
                status.as_u16()
            )));
        }

        let rows: Vec<NominatimPlaceDto> = response.json().await.map_err(|error| {
            GeocodingSourceError::decode(format!("invalid Nominatim payload: {error}"))
        })?;

        Ok(rows
            .into_iter()
            .filter_map(NominatimPlaceDto::into_geocoded_place)
            .collect())
    }
}
