//! Mapbox Search Box client
//!
//! One method, one round trip: `forward` issues a single forward-geocode
//! query against the Search Box API and converts the feature page into the
//! application's port model.

use std::time::Duration;

use application::ApplicationError;
use application::ports::{GeocodingPort, PlaceFeature};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::MapboxConfig;
use crate::error::GeocodingError;
use crate::models::SearchResponse;

/// Mapbox Search Box geocoding client
#[derive(Debug)]
pub struct MapboxGeocodingClient {
    client: Client,
    config: MapboxConfig,
}

impl MapboxGeocodingClient {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &MapboxConfig) -> Result<Self, GeocodingError> {
        config.validate().map_err(GeocodingError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("transit-stop-finder/0.2")
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Issue a single forward-geocode query
    ///
    /// # Errors
    ///
    /// Returns a [`GeocodingError`] on transport, status, or decode
    /// failures. An empty feature page is `Ok(vec![])`, not an error.
    #[instrument(skip(self))]
    pub async fn forward(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<PlaceFeature>, GeocodingError> {
        let url = format!("{}/forward", self.config.base_url);
        let params = [
            ("q", query.to_string()),
            ("access_token", self.config.access_token.clone()),
            ("limit", limit.to_string()),
        ];

        debug!(%query, limit, "Forward geocoding");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimited);
        }

        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let features: Vec<PlaceFeature> = body
            .features
            .into_iter()
            .map(crate::models::RawFeature::into_place_feature)
            .collect();

        debug!(count = features.len(), "Forward geocode returned features");
        Ok(features)
    }
}

#[async_trait]
impl GeocodingPort for MapboxGeocodingClient {
    async fn forward_search(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<PlaceFeature>, ApplicationError> {
        self.forward(query, limit).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_missing_token() {
        let config = MapboxConfig::new("");
        let result = MapboxGeocodingClient::new(&config);
        assert!(matches!(result, Err(GeocodingError::Configuration(_))));
    }

    #[test]
    fn test_new_with_valid_config() {
        let config = MapboxConfig::new("pk.token");
        assert!(MapboxGeocodingClient::new(&config).is_ok());
    }
}
