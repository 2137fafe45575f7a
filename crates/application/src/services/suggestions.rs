//! Autocomplete suggestion service
//!
//! Turns raw geocoder features into a short, deduplicated list of display
//! strings for a live-typing UI. The service never fails: short queries and
//! upstream errors both produce an empty list, since silence beats an error
//! surface while the user is still typing.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::ports::{GeocodingPort, PlaceFeature};

/// Maximum suggestions returned, and the default upstream page size
pub const MAX_SUGGESTIONS: u8 = 5;

/// Queries shorter than this (after trimming) skip the upstream call
const MIN_QUERY_CHARS: usize = 2;

/// Feature types rendered as "name, region" rather than full addresses
const PLACE_FEATURE_TYPES: [&str; 3] = ["place", "locality", "neighborhood"];

/// A display/submit pair for autocomplete UIs
///
/// `text` and `value` are always equal: the display string is also what
/// gets submitted for the subsequent geocode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    /// Display text
    pub text: String,
    /// Submitted value
    pub value: String,
}

impl SuggestionEntry {
    fn from_display(display: String) -> Self {
        Self {
            value: display.clone(),
            text: display,
        }
    }
}

/// Display-name rule evaluated against a feature; `None` means "next rule"
type DisplayRule = fn(&PlaceFeature) -> Option<String>;

/// Priority ladder, evaluated top to bottom per feature
const DISPLAY_RULES: [DisplayRule; 3] = [place_rule, named_rule, formatted_rule];

/// Rule 1: places, localities and neighborhoods keep their bare name,
/// qualified by the region when one is present
fn place_rule(feature: &PlaceFeature) -> Option<String> {
    let feature_type = feature.feature_type.as_deref()?;
    if !PLACE_FEATURE_TYPES.contains(&feature_type) {
        return None;
    }
    let name = non_empty(feature.name.as_deref())?;
    Some(match non_empty(feature.region.as_deref()) {
        Some(region) => format!("{name}, {region}"),
        None => name.to_string(),
    })
}

/// Rule 2: any named feature, preferring region, then district
fn named_rule(feature: &PlaceFeature) -> Option<String> {
    let name = non_empty(feature.name.as_deref())?;
    let qualifier = non_empty(feature.region.as_deref())
        .or_else(|| non_empty(feature.district.as_deref()));
    Some(match qualifier {
        Some(qualifier) => format!("{name}, {qualifier}"),
        None => name.to_string(),
    })
}

/// Rule 3: provider-formatted address, with trailing country/zip segments
/// dropped when there are more than two comma-separated parts
fn formatted_rule(feature: &PlaceFeature) -> Option<String> {
    let formatted = non_empty(feature.place_formatted.as_deref())?;
    let parts: Vec<&str> = formatted.split(',').collect();
    if parts.len() > 2 {
        Some(parts[..2].join(",").trim().to_string())
    } else {
        Some(formatted.to_string())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Display name for a feature, or `None` when no rule produces text
fn display_name(feature: &PlaceFeature) -> Option<String> {
    DISPLAY_RULES.iter().find_map(|rule| rule(feature))
}

/// Produces autocomplete suggestions from the geocoding port
#[derive(Clone)]
pub struct SuggestionService {
    geocoding: Arc<dyn GeocodingPort>,
    page_limit: u8,
}

impl std::fmt::Debug for SuggestionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionService")
            .field("geocoding", &"<GeocodingPort>")
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

impl SuggestionService {
    /// Create a new suggestion service
    #[must_use]
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self {
            geocoding,
            page_limit: MAX_SUGGESTIONS,
        }
    }

    /// Override the upstream page size
    ///
    /// Output stays capped at [`MAX_SUGGESTIONS`]; a larger page only gives
    /// the dedup more candidates to work with.
    #[must_use]
    pub const fn with_page_limit(mut self, limit: u8) -> Self {
        self.page_limit = limit;
        self
    }

    /// Suggest completions for a partial query
    ///
    /// Never fails. Entries are deduplicated on display text (first
    /// occurrence kept) and capped at [`MAX_SUGGESTIONS`].
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Vec<SuggestionEntry> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let features = match self.geocoding.forward_search(query, self.page_limit).await {
            Ok(features) => features,
            Err(e) => {
                warn!(error = %e, "Suggestion lookup failed, returning empty list");
                return Vec::new();
            },
        };

        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for feature in features {
            let Some(display) = display_name(&feature) else {
                continue;
            };
            if seen.insert(display.clone()) {
                entries.push(SuggestionEntry::from_display(display));
            }
            if entries.len() >= usize::from(MAX_SUGGESTIONS) {
                break;
            }
        }

        debug!(count = entries.len(), "Built suggestions");
        entries
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockGeocodingPort;

    fn feature(
        name: Option<&str>,
        feature_type: Option<&str>,
        region: Option<&str>,
        district: Option<&str>,
        place_formatted: Option<&str>,
    ) -> PlaceFeature {
        PlaceFeature {
            name: name.map(String::from),
            feature_type: feature_type.map(String::from),
            region: region.map(String::from),
            district: district.map(String::from),
            place_formatted: place_formatted.map(String::from),
            location: None,
        }
    }

    #[test]
    fn test_place_rule_with_region() {
        let f = feature(Some("Cambridge"), Some("place"), Some("Massachusetts"), None, None);
        assert_eq!(display_name(&f).as_deref(), Some("Cambridge, Massachusetts"));
    }

    #[test]
    fn test_place_rule_without_region() {
        let f = feature(Some("Allston"), Some("neighborhood"), None, None, None);
        assert_eq!(display_name(&f).as_deref(), Some("Allston"));
    }

    #[test]
    fn test_named_rule_prefers_region_over_district() {
        let f = feature(
            Some("123 Main St"),
            Some("address"),
            Some("Massachusetts"),
            Some("Middlesex County"),
            None,
        );
        assert_eq!(display_name(&f).as_deref(), Some("123 Main St, Massachusetts"));
    }

    #[test]
    fn test_named_rule_falls_back_to_district() {
        let f = feature(
            Some("123 Main St"),
            Some("address"),
            None,
            Some("Middlesex County"),
            None,
        );
        assert_eq!(
            display_name(&f).as_deref(),
            Some("123 Main St, Middlesex County")
        );
    }

    #[test]
    fn test_formatted_rule_drops_trailing_segments() {
        let f = feature(
            None,
            None,
            None,
            None,
            Some("Boston, Massachusetts, United States, 02108"),
        );
        assert_eq!(display_name(&f).as_deref(), Some("Boston, Massachusetts"));
    }

    #[test]
    fn test_formatted_rule_keeps_short_addresses() {
        let f = feature(None, None, None, None, Some("Boston, Massachusetts"));
        assert_eq!(display_name(&f).as_deref(), Some("Boston, Massachusetts"));
    }

    #[test]
    fn test_feature_with_nothing_usable_is_skipped() {
        let f = feature(None, Some("address"), Some("Massachusetts"), None, None);
        assert_eq!(display_name(&f), None);
    }

    #[tokio::test]
    async fn test_short_query_makes_no_network_call() {
        let mut port = MockGeocodingPort::new();
        port.expect_forward_search().times(0);

        let service = SuggestionService::new(Arc::new(port));
        assert!(service.suggest("a").await.is_empty());
        assert!(service.suggest("  b  ").await.is_empty());
        assert!(service.suggest("").await.is_empty());
    }

    #[tokio::test]
    async fn test_default_page_limit_reaches_the_port() {
        let mut port = MockGeocodingPort::new();
        port.expect_forward_search()
            .with(eq("boston"), eq(MAX_SUGGESTIONS))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = SuggestionService::new(Arc::new(port));
        assert!(service.suggest("boston").await.is_empty());
    }

    #[tokio::test]
    async fn test_custom_page_limit_reaches_the_port() {
        let mut port = MockGeocodingPort::new();
        port.expect_forward_search()
            .with(eq("boston"), eq(8))
            .times(1)
            .returning(|_, _| {
                Ok(vec![feature(
                    Some("Boston"),
                    Some("place"),
                    Some("Massachusetts"),
                    None,
                    None,
                )])
            });

        let service = SuggestionService::new(Arc::new(port)).with_page_limit(8);
        assert_eq!(service.suggest("boston").await.len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_error_degrades_to_empty() {
        let mut port = MockGeocodingPort::new();
        port.expect_forward_search()
            .times(1)
            .returning(|_, _| Err(ApplicationError::ExternalService("HTTP 503".to_string())));

        let service = SuggestionService::new(Arc::new(port));
        assert!(service.suggest("boston").await.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_display_text_collapsed() {
        let mut port = MockGeocodingPort::new();
        port.expect_forward_search().returning(|_, _| {
            Ok(vec![
                feature(Some("Boston"), Some("place"), Some("Massachusetts"), None, None),
                feature(Some("Boston"), Some("locality"), Some("Massachusetts"), None, None),
                feature(Some("Boston"), Some("place"), None, None, None),
            ])
        });

        let service = SuggestionService::new(Arc::new(port));
        let suggestions = service.suggest("boston").await;
        let texts: Vec<&str> = suggestions.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Boston, Massachusetts", "Boston"]);
    }

    #[tokio::test]
    async fn test_cap_at_page_size() {
        let mut port = MockGeocodingPort::new();
        port.expect_forward_search().returning(|_, _| {
            Ok((0..10)
                .map(|i| feature(Some(&format!("Place {i}")), Some("place"), None, None, None))
                .collect())
        });

        let service = SuggestionService::new(Arc::new(port));
        let suggestions = service.suggest("place").await;
        assert_eq!(suggestions.len(), usize::from(MAX_SUGGESTIONS));
    }

    #[tokio::test]
    async fn test_text_equals_value() {
        let mut port = MockGeocodingPort::new();
        port.expect_forward_search().returning(|_, _| {
            Ok(vec![feature(
                Some("Boston"),
                Some("place"),
                Some("Massachusetts"),
                None,
                None,
            )])
        });

        let service = SuggestionService::new(Arc::new(port));
        let suggestions = service.suggest("boston").await;
        assert_eq!(suggestions[0].text, suggestions[0].value);
    }

    #[tokio::test]
    async fn test_serializes_as_text_value_objects() {
        let entry = SuggestionEntry::from_display("Boston, Massachusetts".to_string());
        let json = serde_json::to_string(&entry).expect("serialize");
        assert_eq!(
            json,
            r#"{"text":"Boston, Massachusetts","value":"Boston, Massachusetts"}"#
        );
    }
}
