//! MBTA stops client
//!
//! Thin client over `GET /stops` in its two shapes. Each method is a single
//! round trip; no retries happen here.

use std::time::Duration;

use application::ApplicationError;
use application::ports::{StopRecord, TransitPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::MbtaConfig;
use crate::error::TransitError;
use crate::models::StopsResponse;

/// MBTA v3 API transit client
#[derive(Debug)]
pub struct MbtaTransitClient {
    client: Client,
    config: MbtaConfig,
}

impl MbtaTransitClient {
    /// Create a new MBTA transit client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &MbtaConfig) -> Result<Self, TransitError> {
        config.validate().map_err(TransitError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("transit-stop-finder/0.2")
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// List stops sorted by distance from a coordinate, nearest first
    ///
    /// # Errors
    ///
    /// Returns a [`TransitError`] on transport, status, or decode failures.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn stops_sorted_by_distance(
        &self,
        location: &GeoLocation,
        limit: u8,
    ) -> Result<Vec<StopRecord>, TransitError> {
        let params = [
            ("api_key", self.config.api_key.clone()),
            ("sort", "distance".to_string()),
            ("filter[latitude]", location.latitude().to_string()),
            ("filter[longitude]", location.longitude().to_string()),
            ("page[limit]", limit.to_string()),
        ];

        debug!("Querying distance-sorted stops");
        self.get_stops(&params).await
    }

    /// Fetch up to `limit` stops with no spatial filter
    ///
    /// # Errors
    ///
    /// Returns a [`TransitError`] on transport, status, or decode failures.
    #[instrument(skip(self))]
    pub async fn stops_page(&self, limit: u32) -> Result<Vec<StopRecord>, TransitError> {
        let params = [
            ("api_key", self.config.api_key.clone()),
            ("page[limit]", limit.to_string()),
        ];

        debug!(limit, "Fetching unfiltered stop page");
        self.get_stops(&params).await
    }

    async fn get_stops(&self, params: &[(&str, String)]) -> Result<Vec<StopRecord>, TransitError> {
        let url = format!("{}/stops", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimited);
        }

        if !status.is_success() {
            return Err(TransitError::RequestFailed(format!("HTTP {status}")));
        }

        let body: StopsResponse = response
            .json()
            .await
            .map_err(|e| TransitError::ParseError(e.to_string()))?;

        let stops: Vec<StopRecord> = body
            .data
            .into_iter()
            .map(crate::models::RawStop::into_stop_record)
            .collect();

        debug!(count = stops.len(), "Stop listing returned");
        Ok(stops)
    }
}

#[async_trait]
impl TransitPort for MbtaTransitClient {
    async fn stops_by_distance(
        &self,
        location: &GeoLocation,
        limit: u8,
    ) -> Result<Vec<StopRecord>, ApplicationError> {
        self.stops_sorted_by_distance(location, limit)
            .await
            .map_err(Into::into)
    }

    async fn stop_page(&self, limit: u32) -> Result<Vec<StopRecord>, ApplicationError> {
        self.stops_page(limit).await.map_err(Into::into)
    }
}
