//! Nearest-stop resolution facade
//!
//! Composes the geocoder and the two-tier nearest-stop resolver into the
//! single entry point the HTTP layer calls. Tier 1 asks the provider for a
//! distance-sorted listing and trusts its order; Tier 2 fetches an
//! unfiltered page and scans it with the haversine distance, because the
//! provider's spatial filter occasionally returns nothing for
//! edge-of-coverage coordinates even though stops exist within the page.

use std::sync::Arc;

use domain::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{StopRecord, TransitPort};
use crate::services::GeocoderService;

/// Default page size for the fallback fetch; a tunable bound, not a
/// semantic requirement.
const DEFAULT_FALLBACK_PAGE_LIMIT: u32 = 1000;

/// The resolved nearest stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestStop {
    /// Stop name as reported by the provider
    pub name: String,
    /// True iff the provider explicitly marked the stop accessible
    pub accessible: bool,
}

impl From<StopRecord> for NearestStop {
    fn from(stop: StopRecord) -> Self {
        Self {
            name: stop.name,
            accessible: stop.wheelchair_boarding.is_accessible(),
        }
    }
}

/// Facade for "find the nearest transit stop to this place name"
#[derive(Clone)]
pub struct StopFinderService {
    geocoder: GeocoderService,
    transit: Arc<dyn TransitPort>,
    fallback_page_limit: u32,
}

impl std::fmt::Debug for StopFinderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopFinderService")
            .field("geocoder", &self.geocoder)
            .field("transit", &"<TransitPort>")
            .field("fallback_page_limit", &self.fallback_page_limit)
            .finish()
    }
}

impl StopFinderService {
    /// Create a new stop finder
    #[must_use]
    pub fn new(geocoder: GeocoderService, transit: Arc<dyn TransitPort>) -> Self {
        Self {
            geocoder,
            transit,
            fallback_page_limit: DEFAULT_FALLBACK_PAGE_LIMIT,
        }
    }

    /// Override the fallback page size
    #[must_use]
    pub const fn with_fallback_page_limit(mut self, limit: u32) -> Self {
        self.fallback_page_limit = limit;
        self
    }

    /// Resolve a place name to the nearest transit stop
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::PlaceNotFound`] when geocoding exhausts
    /// its variants, or [`ApplicationError::NoStationNearby`] when both
    /// resolver tiers come up empty.
    #[instrument(skip(self))]
    pub async fn find_stop_near(&self, place_name: &str) -> Result<NearestStop, ApplicationError> {
        let location = self.geocoder.locate(place_name).await?;
        self.nearest_stop(&location).await
    }

    /// Find the nearest stop to a coordinate
    ///
    /// Tiers form a retry ladder with early exit on the first success; a
    /// tier that errors or returns nothing hands over to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NoStationNearby`] when both tiers miss.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn nearest_stop(
        &self,
        location: &GeoLocation,
    ) -> Result<NearestStop, ApplicationError> {
        if let Some(stop) = self.provider_sorted_tier(location).await {
            return Ok(stop);
        }
        if let Some(stop) = self.exhaustive_scan_tier(location).await {
            return Ok(stop);
        }
        Err(ApplicationError::NoStationNearby)
    }

    /// Tier 1: one distance-sorted provider query, first result wins
    async fn provider_sorted_tier(&self, location: &GeoLocation) -> Option<NearestStop> {
        match self.transit.stops_by_distance(location, 1).await {
            Ok(stops) => {
                let nearest = stops.into_iter().next();
                if nearest.is_none() {
                    debug!("Distance-sorted query returned no stops, falling back to scan");
                }
                nearest.map(NearestStop::from)
            },
            Err(e) => {
                warn!(error = %e, "Distance-sorted stop query failed, falling back to scan");
                None
            },
        }
    }

    /// Tier 2: fetch an unfiltered page and scan for the minimum distance
    ///
    /// Stops without both coordinates are skipped. Exact distance ties go to
    /// the first-seen record; with floating-point distances they are
    /// effectively never exact.
    async fn exhaustive_scan_tier(&self, location: &GeoLocation) -> Option<NearestStop> {
        let stops = match self.transit.stop_page(self.fallback_page_limit).await {
            Ok(stops) => stops,
            Err(e) => {
                warn!(error = %e, "Fallback stop page fetch failed");
                return None;
            },
        };

        let mut best: Option<(f64, StopRecord)> = None;
        for stop in stops {
            let Some(stop_location) = stop.location() else {
                continue;
            };
            let distance = location.distance_miles(&stop_location);
            if best.as_ref().is_none_or(|(d, _)| distance < *d) {
                best = Some((distance, stop));
            }
        }

        best.map(|(distance, stop)| {
            debug!(stop = %stop.name, distance_miles = distance, "Nearest stop via fallback scan");
            NearestStop::from(stop)
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::{
        MockGeocodingPort, MockTransitPort, PlaceFeature, WheelchairBoarding,
    };

    fn geocoder_returning(lat: f64, lon: f64) -> GeocoderService {
        let mut port = MockGeocodingPort::new();
        port.expect_forward_search().returning(move |_, _| {
            Ok(vec![
                PlaceFeature::named("hit")
                    .with_location(GeoLocation::new(lat, lon).expect("valid test coordinates")),
            ])
        });
        GeocoderService::new(Arc::new(port))
    }

    fn stop(name: &str, lat: f64, lon: f64, boarding: WheelchairBoarding) -> StopRecord {
        StopRecord {
            name: name.to_string(),
            latitude: Some(lat),
            longitude: Some(lon),
            wheelchair_boarding: boarding,
        }
    }

    #[tokio::test]
    async fn test_tier1_first_result_wins() {
        let mut transit = MockTransitPort::new();
        transit
            .expect_stops_by_distance()
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    stop("Park Street", 42.356, -71.062, WheelchairBoarding::Accessible),
                    stop("Downtown Crossing", 42.355, -71.060, WheelchairBoarding::Accessible),
                ])
            });
        transit.expect_stop_page().times(0);

        let service = StopFinderService::new(geocoder_returning(42.355, -71.065), Arc::new(transit));
        let nearest = service.find_stop_near("Boston Common").await.unwrap();
        assert_eq!(nearest.name, "Park Street");
        assert!(nearest.accessible);
    }

    #[tokio::test]
    async fn test_tier2_invoked_when_tier1_empty() {
        let mut transit = MockTransitPort::new();
        transit
            .expect_stops_by_distance()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        transit
            .expect_stop_page()
            .with(eq(1000))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    stop("Far Stop", 42.40, -71.10, WheelchairBoarding::NoInfo),
                    stop("Near Stop", 42.356, -71.064, WheelchairBoarding::NotAccessible),
                ])
            });

        let service = StopFinderService::new(geocoder_returning(42.355, -71.065), Arc::new(transit));
        let nearest = service.find_stop_near("Boston Common").await.unwrap();
        assert_eq!(nearest.name, "Near Stop");
        assert!(!nearest.accessible);
    }

    #[tokio::test]
    async fn test_tier2_invoked_when_tier1_errors() {
        let mut transit = MockTransitPort::new();
        transit
            .expect_stops_by_distance()
            .times(1)
            .returning(|_, _| Err(ApplicationError::ExternalService("HTTP 500".to_string())));
        transit
            .expect_stop_page()
            .times(1)
            .returning(|_| Ok(vec![stop("Only Stop", 42.0, -71.0, WheelchairBoarding::Accessible)]));

        let service = StopFinderService::new(geocoder_returning(42.355, -71.065), Arc::new(transit));
        let nearest = service.find_stop_near("Boston Common").await.unwrap();
        assert_eq!(nearest.name, "Only Stop");
    }

    #[tokio::test]
    async fn test_tier2_skips_stops_without_coordinates() {
        let mut transit = MockTransitPort::new();
        transit
            .expect_stops_by_distance()
            .returning(|_, _| Ok(vec![]));
        transit.expect_stop_page().returning(|_| {
            Ok(vec![
                StopRecord {
                    name: "Coordinate-less".to_string(),
                    latitude: None,
                    longitude: None,
                    wheelchair_boarding: WheelchairBoarding::Accessible,
                },
                stop("Usable", 42.36, -71.06, WheelchairBoarding::NoInfo),
            ])
        });

        let service = StopFinderService::new(geocoder_returning(42.355, -71.065), Arc::new(transit));
        let nearest = service.find_stop_near("Boston Common").await.unwrap();
        assert_eq!(nearest.name, "Usable");
    }

    #[tokio::test]
    async fn test_no_station_nearby_when_both_tiers_empty() {
        let mut transit = MockTransitPort::new();
        transit
            .expect_stops_by_distance()
            .returning(|_, _| Ok(vec![]));
        transit.expect_stop_page().returning(|_| Ok(vec![]));

        let service = StopFinderService::new(geocoder_returning(42.355, -71.065), Arc::new(transit));
        let err = service.find_stop_near("Boston Common").await.unwrap_err();
        assert!(matches!(err, ApplicationError::NoStationNearby));
    }

    #[tokio::test]
    async fn test_no_station_nearby_when_no_usable_candidates() {
        let mut transit = MockTransitPort::new();
        transit
            .expect_stops_by_distance()
            .returning(|_, _| Ok(vec![]));
        transit.expect_stop_page().returning(|_| {
            Ok(vec![StopRecord {
                name: "Coordinate-less".to_string(),
                latitude: None,
                longitude: None,
                wheelchair_boarding: WheelchairBoarding::Accessible,
            }])
        });

        let service = StopFinderService::new(geocoder_returning(42.355, -71.065), Arc::new(transit));
        let err = service.find_stop_near("Boston Common").await.unwrap_err();
        assert!(matches!(err, ApplicationError::NoStationNearby));
    }

    #[tokio::test]
    async fn test_geocode_failure_propagates_before_transit_is_touched() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_forward_search()
            .returning(|_, _| Ok(vec![]));
        let mut transit = MockTransitPort::new();
        transit.expect_stops_by_distance().times(0);
        transit.expect_stop_page().times(0);

        let service = StopFinderService::new(
            GeocoderService::new(Arc::new(geocoding)),
            Arc::new(transit),
        );
        let err = service
            .find_stop_near("zzzxyqnonexistentplace123")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::PlaceNotFound { query } if query == "zzzxyqnonexistentplace123"
        ));
    }

    #[tokio::test]
    async fn test_accessibility_mapping_in_tier1() {
        for (boarding, expected) in [
            (WheelchairBoarding::NoInfo, false),
            (WheelchairBoarding::Accessible, true),
            (WheelchairBoarding::NotAccessible, false),
        ] {
            let mut transit = MockTransitPort::new();
            transit
                .expect_stops_by_distance()
                .returning(move |_, _| Ok(vec![stop("S", 42.0, -71.0, boarding)]));

            let service =
                StopFinderService::new(geocoder_returning(42.355, -71.065), Arc::new(transit));
            let nearest = service.find_stop_near("Boston Common").await.unwrap();
            assert_eq!(nearest.accessible, expected);
        }
    }

    #[tokio::test]
    async fn test_custom_fallback_page_limit() {
        let mut transit = MockTransitPort::new();
        transit
            .expect_stops_by_distance()
            .returning(|_, _| Ok(vec![]));
        transit
            .expect_stop_page()
            .with(eq(50))
            .times(1)
            .returning(|_| Ok(vec![stop("S", 42.0, -71.0, WheelchairBoarding::NoInfo)]));

        let service = StopFinderService::new(geocoder_returning(42.355, -71.065), Arc::new(transit))
            .with_fallback_page_limit(50);
        assert!(service.find_stop_near("Boston Common").await.is_ok());
    }
}
