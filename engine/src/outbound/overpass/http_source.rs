//! Reqwest-backed Overpass place source adapter.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping, and JSON decoding into raw place elements.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::OverpassResponseDto;
use crate::domain::ports::{PlaceElement, PlaceQuery, PlaceSource, PlaceSourceError};

/// Public Overpass API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// The three place classes one discovery query covers.
const PLACE_CLASSES: [&str; 3] = ["restaurant", "cafe", "fast_food"];

const DEFAULT_QUERY_TIMEOUT_SECONDS: u32 = 25;
const DEFAULT_USER_AGENT: &str = "lunch-roulette-engine/0.1";
const DEFAULT_CONTACT: &str = "ops@lunch-roulette.invalid";

/// Outbound identity and query timeout settings for Overpass requests.
pub struct OverpassHttpIdentity {
    /// HTTP user-agent sent to Overpass.
    pub user_agent: String,
    /// Contact header value sent to Overpass.
    pub contact: String,
    /// Timeout directive embedded in Overpass query text.
    pub query_timeout_seconds: u32,
}

impl Default for OverpassHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            contact: DEFAULT_CONTACT.to_owned(),
            query_timeout_seconds: DEFAULT_QUERY_TIMEOUT_SECONDS,
        }
    }
}

/// Overpass adapter that performs HTTP POST requests against one endpoint.
pub struct OverpassHttpSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
    contact: String,
    query_timeout_seconds: u32,
}

impl OverpassHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(endpoint, timeout, OverpassHttpIdentity::default())
    }

    /// Build an adapter with explicit outbound identity and query timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: Url,
        timeout: Duration,
        identity: OverpassHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: identity.user_agent,
            contact: identity.contact,
            query_timeout_seconds: identity.query_timeout_seconds.max(1),
        })
    }
}

#[async_trait]
impl PlaceSource for OverpassHttpSource {
    async fn fetch_places(
        &self,
        query: &PlaceQuery,
    ) -> Result<Vec<PlaceElement>, PlaceSourceError> {
        let body = build_overpass_query(query, self.query_timeout_seconds)?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header("Contact", self.contact.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("data", body)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }

        parse_elements(bytes.as_ref())
    }
}

fn parse_elements(body: &[u8]) -> Result<Vec<PlaceElement>, PlaceSourceError> {
    let decoded: OverpassResponseDto = serde_json::from_slice(body).map_err(|error| {
        PlaceSourceError::decode(format!("invalid Overpass JSON payload: {error}"))
    })?;
    Ok(decoded.into_place_elements())
}

fn build_overpass_query(query: &PlaceQuery, timeout_seconds: u32) -> Result<String, PlaceSourceError> {
    validate_query(query)?;

    let around = format!(
        "(around:{radius},{lat},{lon})",
        radius = query.radius_meters,
        lat = query.latitude,
        lon = query.longitude,
    );

    let mut lines = Vec::with_capacity(PLACE_CLASSES.len() * 3);
    for class in PLACE_CLASSES {
        for element_type in ["node", "way", "relation"] {
            lines.push(format!("  {element_type}[\"amenity\"=\"{class}\"]{around};"));
        }
    }

    Ok(format!(
        "[out:json][timeout:{timeout_seconds}];\n(\n{query_lines}\n);\nout center tags;",
        query_lines = lines.join("\n")
    ))
}

fn validate_query(query: &PlaceQuery) -> Result<(), PlaceSourceError> {
    if !query.latitude.is_finite() || !query.longitude.is_finite() {
        return Err(PlaceSourceError::invalid_request(
            "centre must have finite coordinates",
        ));
    }
    if !(-90.0..=90.0).contains(&query.latitude) {
        return Err(PlaceSourceError::invalid_request(
            "latitude must be within [-90, 90]",
        ));
    }
    if !(-180.0..=180.0).contains(&query.longitude) {
        return Err(PlaceSourceError::invalid_request(
            "longitude must be within [-180, 180]",
        ));
    }
    if query.radius_meters == 0 {
        return Err(PlaceSourceError::invalid_request(
            "radius must be positive",
        ));
    }
    Ok(())
}

fn map_transport_error(error: reqwest::Error) -> PlaceSourceError {
    if error.is_timeout() {
        PlaceSourceError::timeout(error.to_string())
    } else {
        PlaceSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PlaceSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => PlaceSourceError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PlaceSourceError::timeout(message)
        }
        _ if status.is_client_error() => PlaceSourceError::invalid_request(message),
        _ => PlaceSourceError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
