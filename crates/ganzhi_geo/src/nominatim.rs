//! Blocking client for the Nominatim search API.

use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::GeocoderConfig;
use crate::error::GeoError;
use crate::resolver::{GeoPoint, GeoResolver};

/// One entry of a Nominatim `format=json` search result.
///
/// Coordinates arrive as decimal strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

fn parse_coordinate(raw: &str, what: &str) -> Result<f64, GeoError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeoError::InvalidResponse(format!("{what} '{raw}' is not a number")))
}

/// First match in a Nominatim JSON search body, or `None` for no match.
pub fn parse_search_response(body: &str) -> Result<Option<GeoPoint>, GeoError> {
    let places: Vec<Place> = serde_json::from_str(body)?;
    let Some(first) = places.first() else {
        return Ok(None);
    };
    Ok(Some(GeoPoint {
        longitude: parse_coordinate(&first.lon, "lon")?,
        latitude: parse_coordinate(&first.lat, "lat")?,
    }))
}

/// Geocoder backed by a Nominatim-compatible HTTP endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    endpoint: Url,
}

impl NominatimClient {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeoError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            GeoError::GeoServiceUnavailable(format!("bad endpoint '{}': {e}", config.endpoint))
        })?;
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Request URL for `query`.
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");
        url
    }
}

impl GeoResolver for NominatimClient {
    fn resolve(&self, query: &str) -> Result<GeoPoint, GeoError> {
        let url = self.search_url(query);
        debug!(%url, "geocoding request");
        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        parse_search_response(&body)?.ok_or_else(|| GeoError::LocationNotFound(query.to_string()))
    }
}
