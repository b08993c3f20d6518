//! Geocoding lookup collaborator
//!
//! The enrichment stage only depends on [`LookupService`]; [`GoogleGeocoder`]
//! is the production implementation backed by the Google Geocoding API.

use crate::config::LookupConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Query sent to the lookup service for one entry
#[derive(Debug, Clone, PartialEq)]
pub enum LookupQuery {
    /// Reverse lookup of known coordinates
    Coordinates { latitude: f64, longitude: f64 },
    /// Forward lookup of a postal code within a region and country
    Address {
        postal_code: String,
        region: Option<String>,
        country: String,
    },
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupQuery::Coordinates {
                latitude,
                longitude,
            } => write!(f, "{},{}", latitude, longitude),
            LookupQuery::Address {
                postal_code,
                region,
                country,
            } => match region {
                Some(region) => write!(f, "{},{},{}", postal_code, region, country),
                None => write!(f, "{},{}", postal_code, country),
            },
        }
    }
}

/// One address component of a lookup candidate
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn has_type(&self, kind: &str) -> bool {
        self.types.iter().any(|t| t == kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Geometry {
    pub location: Option<LatLng>,
}

/// A single result returned by the lookup service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl GeocodeCandidate {
    /// First component carrying the given type
    pub fn component(&self, kind: &str) -> Option<&AddressComponent> {
        self.address_components.iter().find(|c| c.has_type(kind))
    }

    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

/// External geographic lookup
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Look up candidates for a query; no match is an empty list
    async fn lookup(&self, query: &LookupQuery) -> Result<Vec<GeocodeCandidate>>;
}

/// Google Geocoding API response
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeCandidate>,
    #[serde(default)]
    error_message: Option<String>,
}

/// Google Geocoding API client
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::configuration("Geocoding API key is not configured"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::http("Failed to build geocoding client", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl LookupService for GoogleGeocoder {
    async fn lookup(&self, query: &LookupQuery) -> Result<Vec<GeocodeCandidate>> {
        let parameter = match query {
            LookupQuery::Coordinates { .. } => "latlng",
            LookupQuery::Address { .. } => "address",
        };
        debug!("Geocoding {}={}", parameter, query);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[(parameter, query.to_string()), ("key", self.api_key.clone())])
            .send()
            .await
            .map_err(|e| Error::http(format!("Geocoding request failed for {}", query), e))?
            .error_for_status()
            .map_err(|e| Error::http(format!("Geocoding request rejected for {}", query), e))?;

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| Error::http("Invalid geocoding response", e))?;

        match body.status.as_str() {
            "OK" => Ok(body.results),
            "ZERO_RESULTS" => Ok(Vec::new()),
            status => Err(Error::lookup(format!(
                "Geocoding status {} for {}{}",
                status,
                query,
                body.error_message
                    .map(|m| format!(": {}", m))
                    .unwrap_or_default()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_display() {
        let coordinates = LookupQuery::Coordinates {
            latitude: 47.8456,
            longitude: 16.5232,
        };
        assert_eq!(coordinates.to_string(), "47.8456,16.5232");

        let address = LookupQuery::Address {
            postal_code: "7000".to_string(),
            region: Some("Burgenland".to_string()),
            country: "Austria".to_string(),
        };
        assert_eq!(address.to_string(), "7000,Burgenland,Austria");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "status": "OK",
            "results": [{
                "address_components": [
                    {"long_name": "Eisenstadt", "short_name": "Eisenstadt", "types": ["locality", "political"]},
                    {"long_name": "Austria", "short_name": "AT", "types": ["country", "political"]}
                ],
                "geometry": {"location": {"lat": 47.8456, "lng": 16.5232}}
            }]
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "OK");
        let candidate = &response.results[0];
        assert_eq!(candidate.component("country").unwrap().short_name, "AT");
        assert_eq!(candidate.component("locality").unwrap().long_name, "Eisenstadt");
        assert_eq!(candidate.location().unwrap().lat, 47.8456);
    }

    #[test]
    fn test_zero_results_deserialization() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "results": []}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_geocoder_requires_api_key() {
        let config = LookupConfig::default();
        assert!(GoogleGeocoder::new(&config).is_err());
    }
}
